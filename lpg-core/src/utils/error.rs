#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A plumbing error which carries a human readable message, e.g. a file or format failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<InvalidInput> for GenericError {
    fn from(value: InvalidInput) -> Self {
        Self(value.to_string())
    }
}

/// An error raised when a caller passes a value outside of the known domain, e.g. a cylinder size
/// which has no price in the tariff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidInput {
    /// A name of the rejected input.
    pub field: &'static str,
    /// A rejected value as it was passed.
    pub value: String,
    /// A hint how to fix the input.
    pub hint: String,
}

impl InvalidInput {
    /// Creates a new instance of `InvalidInput`.
    pub fn new(field: &'static str, value: impl Into<String>, hint: impl Into<String>) -> Self {
        Self { field, value: value.into(), hint: hint.into() }
    }
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: '{}', {}", self.field, self.value, self.hint)
    }
}

impl std::error::Error for InvalidInput {}
