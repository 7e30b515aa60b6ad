//! Search for grid cells crossed by a fixed hypervolume increase level curve.
//!
//! The grid is induced by the coordinates of the input points themselves: x coordinates sorted
//! ascending, y coordinates sorted descending. Between two adjacent input coordinates the
//! increase function is piecewise linear, so evaluating it at the two diagonal corners of each
//! cell is enough to decide whether the level curve passes through the cell.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/level_curve_test.rs"]
mod level_curve_test;

use crate::algorithms::{dominated_area, increase_over_base, validate_points, validate_reference, validate_scalar};
use crate::utils::{compare_floats, parallel_into_collect, Float, HvResult, Point};

/// A grid cell whose diagonal corners straddle the target level curve, annotated with the
/// hypervolume increase evaluated at both corners.
#[derive(Clone, Debug)]
pub struct LevelCurveCell {
    /// The lower left corner of the cell.
    pub lower_left: Point,
    /// The upper right corner of the cell.
    pub upper_right: Point,
    /// The hypervolume increase of a candidate placed at the lower left corner.
    pub increase_at_lower_left: Float,
    /// The hypervolume increase of a candidate placed at the upper right corner.
    pub increase_at_upper_right: Float,
}

/// Finds the grid cells through which the `delta` level curve of the hypervolume increase
/// function passes: cells where the increase at the lower left corner is strictly above
/// `delta` and the increase at the upper right corner is strictly below it. A corner landing
/// exactly on `delta` fails both strict comparisons, so such a cell is not flagged.
///
/// For `N` input points the grid has `(N - 1)^2` candidate cells and each corner evaluation
/// reruns the dominance filter and sweep from scratch; corner evaluations are independent and
/// run in parallel. Output order is deterministic for identical input order: row-major
/// over the x-sorted and y-sorted adjacency.
pub fn find_level_curve_cells(points: &[Point], reference: &Point, delta: Float) -> HvResult<Vec<LevelCurveCell>> {
    validate_points(points, Some(2))?;
    validate_reference(reference, 2)?;
    validate_scalar("delta", delta)?;

    if points.len() < 2 {
        return Ok(Vec::default());
    }

    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| compare_floats(a[0], b[0]));

    let mut by_y = points.to_vec();
    by_y.sort_by(|a, b| compare_floats(b[1], a[1]));

    let mut candidates = Vec::with_capacity((points.len() - 1) * (points.len() - 1));
    for i in 0..(by_x.len() - 1) {
        for j in 0..(by_y.len() - 1) {
            let lower_left = vec![by_x[i][0], by_y[j + 1][1]];
            let upper_right = vec![by_x[i + 1][0], by_y[j][1]];
            candidates.push((lower_left, upper_right));
        }
    }

    // the base sweep is identical for every corner, compute it once per call
    let base_area = dominated_area(points, reference);

    let evaluated = parallel_into_collect(candidates, |(lower_left, upper_right)| {
        let increase_at_lower_left = increase_over_base(points, &lower_left, reference, base_area);
        let increase_at_upper_right = increase_over_base(points, &upper_right, reference, base_area);

        LevelCurveCell { lower_left, upper_right, increase_at_lower_left, increase_at_upper_right }
    });

    Ok(evaluated
        .into_iter()
        .filter(|cell| cell.increase_at_lower_left > delta && cell.increase_at_upper_right < delta)
        .collect())
}
