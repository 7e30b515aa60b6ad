/// Alias to a scalar floating type.
///
/// NOTE: prefer `f64` as a default floating type: the sweep accumulates products of coordinate
/// differences and `f32` loses exactness already on small staircases.
pub type Float = f64;

/// A point in objective space: an ordered list of coordinates, one per objective.
/// Points are values, not identities: duplicates are permitted.
pub type Point = Vec<Float>;
