use super::*;
use crate::helpers::create_points;

#[test]
fn can_find_cells_crossing_level_curve() {
    let points = create_points(&[(0., 5.), (1., 4.), (2., 2.), (3., 1.), (5., 0.)]);
    let reference = vec![5., 5.];

    let cells = find_level_curve_cells(&points, &reference, 1.).unwrap();

    assert_eq!(cells.len(), 5);
    cells.iter().for_each(|cell| {
        assert!(cell.increase_at_lower_left > 1.);
        assert!(cell.increase_at_upper_right < 1.);
    });
}

#[test]
fn can_annotate_cells_with_corner_increases() {
    let points = create_points(&[(0., 5.), (1., 4.), (2., 2.), (3., 1.), (5., 0.)]);
    let reference = vec![5., 5.];

    let cells = find_level_curve_cells(&points, &reference, 1.).unwrap();

    let cell = cells
        .iter()
        .find(|cell| cell.lower_left == vec![2., 0.] && cell.upper_right == vec![3., 1.])
        .expect("expected cell is not flagged");
    assert_eq!(cell.increase_at_lower_left, 4.);
    assert_eq!(cell.increase_at_upper_right, 0.);
}

#[test]
fn can_exclude_cell_with_corner_exactly_on_level_curve() {
    let points = create_points(&[(2., 2.), (4., 0.)]);
    let reference = vec![5., 5.];

    // the single cell has corner increases of exactly 4 and 0
    assert_eq!(find_level_curve_cells(&points, &reference, 2.).unwrap().len(), 1);
    assert!(find_level_curve_cells(&points, &reference, 4.).unwrap().is_empty());
    assert!(find_level_curve_cells(&points, &reference, 0.).unwrap().is_empty());
}

#[test]
fn can_return_empty_result_for_degenerate_grids() {
    let reference = vec![5., 5.];

    assert!(find_level_curve_cells(&[], &reference, 1.).unwrap().is_empty());
    assert!(find_level_curve_cells(&create_points(&[(1., 1.)]), &reference, 1.).unwrap().is_empty());
}

#[test]
fn can_produce_deterministic_output() {
    let points = create_points(&[(0., 5.), (1., 4.), (2., 2.), (3., 1.), (5., 0.)]);
    let reference = vec![5., 5.];

    let first = find_level_curve_cells(&points, &reference, 1.).unwrap();
    let second = find_level_curve_cells(&points, &reference, 1.).unwrap();

    assert_eq!(first.len(), second.len());
    first.iter().zip(second.iter()).for_each(|(a, b)| {
        assert_eq!(a.lower_left, b.lower_left);
        assert_eq!(a.upper_right, b.upper_right);
        assert_eq!(a.increase_at_lower_left, b.increase_at_lower_left);
        assert_eq!(a.increase_at_upper_right, b.increase_at_upper_right);
    });
}

#[test]
fn can_reject_non_finite_delta() {
    let points = create_points(&[(1., 4.), (2., 2.)]);
    let reference = vec![5., 5.];

    assert!(find_level_curve_cells(&points, &reference, Float::NAN).is_err());
    assert!(find_level_curve_cells(&points, &reference, Float::INFINITY).is_err());
}
