//! This crate provides building blocks for analyzing the hypervolume indicator of a point set
//! in objective space: Pareto dominance filtering, exact 2-D hypervolume computation, the
//! marginal contribution of a candidate point, and a search for grid cells crossed by a fixed
//! contribution level curve.
//!
//! All operations are pure functions over in-memory values: no state is shared or cached
//! across calls.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
