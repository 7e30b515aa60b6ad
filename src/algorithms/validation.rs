#[cfg(test)]
#[path = "../../tests/unit/algorithms/validation_test.rs"]
mod validation_test;

use crate::utils::{Float, HvResult, Point};

/// Checks that all points share one dimensionality (the expected one, if given) and carry only
/// finite coordinates. Returns the common dimensionality, or the expected one for empty input.
pub(crate) fn validate_points(points: &[Point], expected: Option<usize>) -> HvResult<usize> {
    let dimension = expected.or_else(|| points.first().map(|first| first.len())).unwrap_or(0);

    points.iter().try_for_each(|point| validate_point(point, dimension))?;

    Ok(dimension)
}

/// Checks a single point against the expected dimensionality and coordinate finiteness.
pub(crate) fn validate_point(point: &Point, dimension: usize) -> HvResult<()> {
    if point.len() != dimension {
        return Err(format!("point has {} coordinates, expected {dimension}", point.len()).into());
    }

    if point.iter().any(|value| !value.is_finite()) {
        return Err(format!("point has a non-finite coordinate: {point:?}").into());
    }

    Ok(())
}

/// Checks the reference point: it must be non-empty, match the point set dimensionality and
/// carry only finite coordinates.
pub(crate) fn validate_reference(reference: &Point, dimension: usize) -> HvResult<()> {
    if reference.is_empty() {
        return Err("reference point is empty".into());
    }

    validate_point(reference, dimension)
}

/// Checks that a scalar configuration parameter is finite.
pub(crate) fn validate_scalar(name: &str, value: Float) -> HvResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{name} must be finite, got {value}").into())
    }
}
