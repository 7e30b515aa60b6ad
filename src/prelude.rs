//! This module reimports a commonly used types.

pub use crate::algorithms::filter_non_dominated;
pub use crate::algorithms::find_level_curve_cells;
pub use crate::algorithms::hypervolume;
pub use crate::algorithms::hypervolume_increase;
pub use crate::algorithms::DominanceConvention;
pub use crate::algorithms::LevelCurveCell;

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::HvResult;
pub use crate::utils::InvalidInputError;
pub use crate::utils::Point;
