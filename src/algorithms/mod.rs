//! This module contains the algorithmic kernel: dominance filtering, exact hypervolume
//! computation and the level curve cell search.

mod dominance;
pub use self::dominance::*;

mod hypervolume;
pub use self::hypervolume::*;

mod level_curve;
pub use self::level_curve::*;

mod validation;
pub(crate) use self::validation::*;
