//! Reward error types.

use thiserror::Error;

/// Errors specific to reward operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    /// No account owns the credit card that paid for the dining.
    #[error("No account found for credit card '{0}'")]
    AccountNotFound(String),

    /// The merchant is not a participating restaurant.
    #[error("No participating restaurant found for merchant number '{0}'")]
    RestaurantNotFound(String),

    /// No confirmation has been recorded for the dining event.
    #[error("No reward confirmation found for {0}")]
    ConfirmationNotFound(String),

    /// More than one confirmation matches the dining event. The store does
    /// not enforce uniqueness on the dining fingerprint, so this signals
    /// duplicate processing rather than a query bug.
    #[error("Multiple reward confirmations found for {0}")]
    MultipleConfirmations(String),

    /// A reward invariant did not hold; the operation was aborted rather
    /// than silently corrected.
    #[error("Reward invariant violated: {0}")]
    InvariantViolation(String),
}
