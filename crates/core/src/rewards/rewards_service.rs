//! Reward orchestration service.

use std::sync::Arc;

use log::{debug, info};

use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result};
use crate::restaurants::RestaurantRepositoryTrait;

use super::benefit_calculator::BenefitCalculator;
use super::distributor::ContributionDistributor;
use super::rewards_errors::RewardError;
use super::rewards_model::{Dining, RewardConfirmation};
use super::rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};

/// Coordinates the reward flow for dining events: resolve the account and
/// restaurant, calculate the benefit, distribute it, persist the updated
/// savings, and record the confirmation.
pub struct RewardService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    restaurant_repository: Arc<dyn RestaurantRepositoryTrait>,
    reward_repository: Arc<dyn RewardRepositoryTrait>,
    calculator: BenefitCalculator,
    distributor: ContributionDistributor,
}

impl RewardService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        restaurant_repository: Arc<dyn RestaurantRepositoryTrait>,
        reward_repository: Arc<dyn RewardRepositoryTrait>,
    ) -> Self {
        RewardService {
            account_repository,
            restaurant_repository,
            reward_repository,
            calculator: BenefitCalculator,
            distributor: ContributionDistributor,
        }
    }
}

impl RewardServiceTrait for RewardService {
    fn reward_account_for(&self, dining: &Dining) -> Result<RewardConfirmation> {
        debug!("Rewarding account for {}", dining);

        let account = self
            .account_repository
            .find_by_credit_card(dining.credit_card_number())?
            .ok_or_else(|| RewardError::AccountNotFound(dining.credit_card_number().to_string()))?;

        let restaurant = self
            .restaurant_repository
            .find_by_merchant_number(dining.merchant_number())?
            .ok_or_else(|| RewardError::RestaurantNotFound(dining.merchant_number().to_string()))?;

        let benefit = self.calculator.calculate(&restaurant, &account, dining);
        let outcome = self.distributor.distribute(&account, benefit)?;

        if !outcome.contribution.distributions.is_empty() {
            self.account_repository.update_beneficiaries(&outcome.account)?;
        }

        let confirmation = self.reward_repository.confirm(&outcome.contribution, dining)?;
        info!(
            "Confirmed reward {} of {} to account {}",
            confirmation.confirmation_number, benefit, account.number
        );
        Ok(confirmation)
    }

    fn find_confirmation_for(&self, dining: &Dining) -> Result<RewardConfirmation> {
        self.reward_repository.find_confirmation_for(dining)
    }

    fn reward_account_once(&self, dining: &Dining) -> Result<RewardConfirmation> {
        match self.reward_repository.find_confirmation_for(dining) {
            Ok(existing) => {
                debug!(
                    "Dining already rewarded under confirmation {}, returning it",
                    existing.confirmation_number
                );
                Ok(existing)
            }
            Err(Error::Reward(RewardError::ConfirmationNotFound(_))) => {
                self.reward_account_for(dining)
            }
            Err(e) => Err(e),
        }
    }
}
