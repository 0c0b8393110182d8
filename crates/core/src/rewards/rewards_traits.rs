use crate::errors::Result;

use super::rewards_model::{AccountContribution, Dining, RewardConfirmation};

/// Trait for reward confirmation persistence operations
pub trait RewardRepositoryTrait: Send + Sync {
    /// Atomically records the contribution for the dining event: issues the
    /// next confirmation number and writes the reward with all of its
    /// distributions in one transaction. Partial writes are impossible.
    fn confirm(
        &self,
        contribution: &AccountContribution,
        dining: &Dining,
    ) -> Result<RewardConfirmation>;

    /// Finds the single confirmation recorded for the dining event.
    ///
    /// Fails with `RewardError::ConfirmationNotFound` when none exists and
    /// with `RewardError::MultipleConfirmations` when more than one does.
    fn find_confirmation_for(&self, dining: &Dining) -> Result<RewardConfirmation>;

    /// Lists every confirmation recorded for the account, oldest first.
    fn find_confirmations_for_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<RewardConfirmation>>;
}

/// Trait for reward service operations
pub trait RewardServiceTrait: Send + Sync {
    /// Computes and durably records the reward for a dining event.
    fn reward_account_for(&self, dining: &Dining) -> Result<RewardConfirmation>;

    /// Looks up the confirmation previously recorded for a dining event.
    fn find_confirmation_for(&self, dining: &Dining) -> Result<RewardConfirmation>;

    /// Returns the existing confirmation for the dining event if one was
    /// already recorded, otherwise rewards the account now. Callers that
    /// may deliver the same dining event twice should use this entry point.
    fn reward_account_once(&self, dining: &Dining) -> Result<RewardConfirmation>;
}
