//! Shared builders for unit tests.

use crate::utils::{Float, Point};
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Creates a 2-D point set from coordinate pairs.
pub fn create_points(data: &[(Float, Float)]) -> Vec<Point> {
    data.iter().map(|(x, y)| vec![*x, *y]).collect()
}

/// Creates a reproducible random 2-D point set with coordinates in `[0., max)`.
pub fn create_random_points(count: usize, max: Float, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| vec![rng.gen_range(0.0..max), rng.gen_range(0.0..max)]).collect()
}
