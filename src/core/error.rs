use thiserror::Error;

/// Errors raised by the billing engine.
///
/// Every variant is a caller precondition violation detected before any
/// computation runs; the same inputs always produce the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FactureError {
    /// A line item (or an amount handed to a formatter) is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(ValidationError),

    /// A rate is outside `[0, 1)`.
    #[error("invalid rate: {0}")]
    InvalidRate(ValidationError),

    /// The page capacity is zero.
    #[error("invalid page capacity: {0}")]
    InvalidCapacity(ValidationError),
}

impl FactureError {
    /// The validation failure behind this error.
    pub fn detail(&self) -> &ValidationError {
        match self {
            Self::InvalidInput(e) | Self::InvalidRate(e) | Self::InvalidCapacity(e) => e,
        }
    }

    /// Path of the offending field, for form-level error display.
    pub fn field(&self) -> &str {
        &self.detail().field
    }
}

pub type Result<T, E = FactureError> = std::result::Result<T, E>;

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the invalid field (e.g. "items[2].unit_price", "rates.vat_rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Which error kind this failure maps to.
    pub kind: ErrorKind,
}

/// Classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Rate,
    Capacity,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create an input validation error.
    pub fn input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, field, message)
    }

    /// Create a rate validation error.
    pub fn rate(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Rate, field, message)
    }

    /// Create a page capacity validation error.
    pub fn capacity(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Capacity, field, message)
    }

    fn new(kind: ErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }
}

impl From<ValidationError> for FactureError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ErrorKind::Input => Self::InvalidInput(err),
            ErrorKind::Rate => Self::InvalidRate(err),
            ErrorKind::Capacity => Self::InvalidCapacity(err),
        }
    }
}
