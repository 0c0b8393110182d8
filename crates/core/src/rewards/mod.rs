//! Rewards module - domain models, services, and traits.

mod benefit_calculator;
mod distributor;
mod reconciler;
mod reconstruction;
mod rewards_constants;
mod rewards_errors;
mod rewards_model;
mod rewards_service;
mod rewards_traits;

#[cfg(test)]
mod rewards_model_tests;

pub use benefit_calculator::BenefitCalculator;
pub use distributor::{ContributionDistributor, DistributionOutcome};
pub use reconciler::is_equal_or_duplicate;
pub use reconstruction::{group_confirmations, ConfirmationRow};
pub use rewards_constants::*;
pub use rewards_errors::RewardError;
pub use rewards_model::{AccountContribution, Dining, Distribution, RewardConfirmation};
pub use rewards_service::RewardService;
pub use rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
