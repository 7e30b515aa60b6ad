//! Pareto dominance filtering over point sets.
//!
//! A point dominates another one when it is at least as good on every objective and strictly
//! better on at least one. Whether "better" means smaller or larger is a convention of the
//! caller, so the filter takes it as an explicit parameter instead of duplicating code paths.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dominance_test.rs"]
mod dominance_test;

use crate::algorithms::validate_points;
use crate::utils::{HvResult, Point};
use rustc_hash::FxHashSet;

/// Specifies the optimization convention applied by the dominance relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DominanceConvention {
    /// Exactly two objectives, both minimized. Used by the hypervolume sweep.
    Minimize2D,
    /// An arbitrary but fixed number of objectives, all maximized. A preprocessing utility
    /// which takes no part in hypervolume computation.
    MaximizeND,
}

/// Returns the Pareto-optimal subset of `points` under the given convention, preserving the
/// input order of surviving points. Exact duplicates never dominate each other, so they are
/// all kept. Time complexity is `O(K * N^2)` pairwise comparisons, which is the documented
/// contract for the expected small inputs.
pub fn filter_non_dominated(points: &[Point], convention: DominanceConvention) -> HvResult<Vec<Point>> {
    match convention {
        DominanceConvention::Minimize2D => {
            validate_points(points, Some(2))?;
            Ok(filter_minimize_2d(points))
        }
        DominanceConvention::MaximizeND => {
            validate_points(points, None)?;
            Ok(filter_maximize_nd(points))
        }
    }
}

/// Removes every point strictly-or-weakly dominated by another one under the two objective
/// minimize convention. Callers guarantee validated 2-D input.
pub(crate) fn filter_minimize_2d(points: &[Point]) -> Vec<Point> {
    let mut dominated: FxHashSet<usize> = FxHashSet::default();

    for p in points.iter() {
        for (j, q) in points.iter().enumerate() {
            // two-clause check keeps exact duplicates mutually non-dominating
            if (p[0] < q[0] && p[1] <= q[1]) || (p[0] <= q[0] && p[1] < q[1]) {
                dominated.insert(j);
            }
        }
    }

    collect_surviving(points, &dominated)
}

fn filter_maximize_nd(points: &[Point]) -> Vec<Point> {
    let mut dominated: FxHashSet<usize> = FxHashSet::default();

    for (i, p) in points.iter().enumerate() {
        if dominated.contains(&i) {
            continue;
        }
        for (j, q) in points.iter().enumerate() {
            let weakly = p.iter().zip(q.iter()).all(|(a, b)| a >= b);
            let strictly = p.iter().zip(q.iter()).any(|(a, b)| a > b);
            if weakly && strictly {
                dominated.insert(j);
            }
        }
    }

    collect_surviving(points, &dominated)
}

fn collect_surviving(points: &[Point], dominated: &FxHashSet<usize>) -> Vec<Point> {
    points.iter().enumerate().filter(|(idx, _)| !dominated.contains(idx)).map(|(_, point)| point.clone()).collect()
}
