//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// These are the failures a caller is expected to see. Lenient outcomes
/// (removing an unknown item, a missing data file) are reported through
/// outcome enums instead and never show up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The requested item is not tracked.
    #[error("item not found: {0}")]
    MissingItem(String),

    /// The stored quantity is not a number and cannot take part in arithmetic.
    #[error("quantity for {0} is not numeric")]
    NotNumeric(String),

    /// Applying the delta would overflow the quantity range.
    #[error("quantity overflow for {0}")]
    Overflow(String),
}

impl StockError {
    pub fn missing_item(item: impl Into<String>) -> Self {
        Self::MissingItem(item.into())
    }

    pub fn not_numeric(item: impl Into<String>) -> Self {
        Self::NotNumeric(item.into())
    }

    pub fn overflow(item: impl Into<String>) -> Self {
        Self::Overflow(item.into())
    }

    /// Name of the item the error refers to.
    pub fn item(&self) -> &str {
        match self {
            StockError::MissingItem(item)
            | StockError::NotNumeric(item)
            | StockError::Overflow(item) => item,
        }
    }
}
