use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use rewards_core::errors::{Error, Result};
use rewards_core::rewards::{
    group_confirmations, AccountContribution, ConfirmationRow, Dining, RewardConfirmation,
    RewardError, RewardRepositoryTrait,
};

use super::model::{to_confirmation_row, RewardDB, RewardDistributionDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{confirmation_sequence, reward_distributions, rewards};
use crate::utils::format_timestamp;

/// Repository for recording and reconstructing reward confirmations.
///
/// Confirmation numbers come from a single-row sequence table read and
/// bumped inside the same immediate transaction that writes the reward,
/// so concurrent confirmations serialize on the database write lock and
/// every number is issued exactly once.
pub struct RewardRepository {
    pool: Arc<DbPool>,
}

impl RewardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Loads the confirmation join for one dining fingerprint, ordered so
    /// rows of the same confirmation are adjacent.
    fn load_rows_for_dining(&self, dining: &Dining) -> Result<Vec<ConfirmationRow>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = rewards::table
            .left_join(reward_distributions::table)
            .filter(rewards::credit_card_number.eq(dining.credit_card_number()))
            .filter(rewards::merchant_number.eq(dining.merchant_number()))
            .filter(rewards::dining_amount.eq(dining.amount().amount().to_string()))
            .filter(rewards::dining_occurred_at.eq(format_timestamp(dining.occurred_at())))
            .order((
                rewards::confirmation_number.asc(),
                reward_distributions::beneficiary_name.asc(),
            ))
            .select((
                RewardDB::as_select(),
                Option::<RewardDistributionDB>::as_select(),
            ))
            .load::<(RewardDB, Option<RewardDistributionDB>)>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|(reward, distribution)| to_confirmation_row(reward, distribution))
            .collect()
    }
}

impl RewardRepositoryTrait for RewardRepository {
    fn confirm(
        &self,
        contribution: &AccountContribution,
        dining: &Dining,
    ) -> Result<RewardConfirmation> {
        let mut conn = get_connection(&self.pool)?;

        let confirmation_number = conn
            .immediate_transaction::<_, StorageError, _>(|conn| {
                let next: i64 = confirmation_sequence::table
                    .select(confirmation_sequence::next_value)
                    .first(conn)?;

                diesel::update(confirmation_sequence::table)
                    .set(confirmation_sequence::next_value.eq(next + 1))
                    .execute(conn)?;

                let reward_id = Uuid::new_v4().to_string();
                let reward = RewardDB {
                    id: reward_id.clone(),
                    confirmation_number: next,
                    account_number: contribution.account_number.clone(),
                    reward_amount: contribution.amount.amount().to_string(),
                    dining_amount: dining.amount().amount().to_string(),
                    credit_card_number: dining.credit_card_number().to_string(),
                    merchant_number: dining.merchant_number().to_string(),
                    dining_occurred_at: format_timestamp(dining.occurred_at()),
                    rewarded_at: format_timestamp(Utc::now()),
                };

                diesel::insert_into(rewards::table)
                    .values(&reward)
                    .execute(conn)?;

                let distributions: Vec<RewardDistributionDB> = contribution
                    .distributions
                    .iter()
                    .map(|distribution| RewardDistributionDB {
                        id: Uuid::new_v4().to_string(),
                        reward_id: reward_id.clone(),
                        beneficiary_name: distribution.beneficiary.clone(),
                        amount: distribution.amount.amount().to_string(),
                        allocation_percentage: distribution.percentage.as_decimal().to_string(),
                        total_savings: distribution.total_savings.amount().to_string(),
                    })
                    .collect();

                if !distributions.is_empty() {
                    diesel::insert_into(reward_distributions::table)
                        .values(&distributions)
                        .execute(conn)?;
                }

                Ok(next)
            })
            .map_err(Error::from)?;

        Ok(RewardConfirmation {
            confirmation_number: confirmation_number.to_string(),
            account_contribution: contribution.clone(),
        })
    }

    fn find_confirmation_for(&self, dining: &Dining) -> Result<RewardConfirmation> {
        let confirmations = group_confirmations(self.load_rows_for_dining(dining)?);

        let mut iter = confirmations.into_iter();
        match (iter.next(), iter.next()) {
            (Some(confirmation), None) => Ok(confirmation),
            (None, _) => Err(RewardError::ConfirmationNotFound(dining.to_string()).into()),
            (Some(_), Some(_)) => {
                Err(RewardError::MultipleConfirmations(dining.to_string()).into())
            }
        }
    }

    fn find_confirmations_for_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<RewardConfirmation>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = rewards::table
            .left_join(reward_distributions::table)
            .filter(rewards::account_number.eq(account_number))
            .order((
                rewards::confirmation_number.asc(),
                reward_distributions::beneficiary_name.asc(),
            ))
            .select((
                RewardDB::as_select(),
                Option::<RewardDistributionDB>::as_select(),
            ))
            .load::<(RewardDB, Option<RewardDistributionDB>)>(&mut conn)
            .map_err(StorageError::from)?;

        let rows = rows
            .into_iter()
            .map(|(reward, distribution)| to_confirmation_row(reward, distribution))
            .collect::<Result<Vec<_>>>()?;

        Ok(group_confirmations(rows))
    }
}
