//! Money error types.
//!
//! Parsing a monetary value or percentage can fail in two distinct ways:
//! the text may be malformed, or it may be well formed but describe a
//! value the type does not admit. Callers rely on the distinction.

use thiserror::Error;

/// Errors specific to monetary amounts and percentages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The text could not be parsed as a number at all.
    #[error("Invalid monetary format: '{0}'")]
    InvalidFormat(String),

    /// The text parsed, but the value is outside the legal range.
    #[error("Illegal value: {0}")]
    IllegalValue(String),

    /// A negative amount where only non-negative amounts are allowed.
    #[error("Amount must not be negative: {0}")]
    NegativeAmount(String),
}

impl MoneyError {
    /// Creates an InvalidFormat error from the offending input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat(input.into())
    }

    /// Creates an IllegalValue error with a description of the violation.
    pub fn illegal_value(message: impl Into<String>) -> Self {
        Self::IllegalValue(message.into())
    }
}
