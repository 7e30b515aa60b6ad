/// An error signaling a caller contract violation: mismatched point dimensionality, an empty
/// reference point, or non-finite input values. This is the only failure class the crate
/// defines; essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct InvalidInputError(String);

/// A type alias for result type with `InvalidInputError`.
pub type HvResult<T> = Result<T, InvalidInputError>;

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InvalidInputError {}

impl From<String> for InvalidInputError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for InvalidInputError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for InvalidInputError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for InvalidInputError {}
