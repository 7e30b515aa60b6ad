//! Exact 2-D hypervolume indicator computation via a coordinate sweep.
//!
//! The hypervolume indicator of a point set relative to a reference point is the area of the
//! union of axis-aligned rectangles, each anchored at a non-dominated point and extending to
//! the reference point. After dominance filtering the surviving points form a staircase with
//! strictly decreasing y as x increases, so one left-to-right sweep sums the area exactly.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/hypervolume_test.rs"]
mod hypervolume_test;

use crate::algorithms::{filter_minimize_2d, validate_point, validate_points, validate_reference};
use crate::utils::{compare_floats, Float, HvResult, Point};

/// Computes the exact hypervolume indicator (area) of `points` relative to `reference` under
/// the two objective minimize convention. Returns zero for an empty set and ignores points not
/// weakly dominated by the reference on both axes. Time complexity is the `O(N^2)` dominance
/// filter plus an `O(N log N)` sort and sweep.
pub fn hypervolume(points: &[Point], reference: &Point) -> HvResult<Float> {
    validate_points(points, Some(2))?;
    validate_reference(reference, 2)?;

    Ok(dominated_area(points, reference))
}

/// Computes the marginal hypervolume increase from inserting `new_point` into `points`: the
/// difference of two from-scratch sweeps, clamped at zero. A `new_point` weakly dominated by
/// an existing point yields exactly zero since the filter removes it before the sweep; the
/// clamp only absorbs floating point noise of the subtraction.
pub fn hypervolume_increase(points: &[Point], new_point: &Point, reference: &Point) -> HvResult<Float> {
    validate_points(points, Some(2))?;
    validate_point(new_point, 2)?;
    validate_reference(reference, 2)?;

    let base_area = dominated_area(points, reference);

    Ok(increase_over_base(points, new_point, reference, base_area))
}

/// Runs filter, clip and sweep on validated input.
pub(crate) fn dominated_area(points: &[Point], reference: &Point) -> Float {
    let (ref_x, ref_y) = (reference[0], reference[1]);

    let mut survivors = filter_minimize_2d(points);
    survivors.retain(|point| point[0] <= ref_x && point[1] <= ref_y);
    survivors.sort_by(|a, b| compare_floats(a[0], b[0]));

    survivors
        .iter()
        .fold((0., ref_y), |(area, previous_y), point| {
            (area + (previous_y - point[1]) * (ref_x - point[0]), point[1])
        })
        .0
}

/// Computes the increase of `new_point` against a precomputed base area, which callers
/// evaluating many candidates against the same set reuse across invocations.
pub(crate) fn increase_over_base(points: &[Point], new_point: &Point, reference: &Point, base_area: Float) -> Float {
    let mut augmented = points.to_vec();
    augmented.push(new_point.clone());

    (dominated_area(&augmented, reference) - base_area).max(0.)
}
