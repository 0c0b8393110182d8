use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use rewards_core::errors::Result;
use rewards_core::rewards::ConfirmationRow;

use crate::utils::{parse_money_column, parse_percentage_column};

/// Reward header row. One row per confirmed contribution; the dining
/// fingerprint columns identify the event the reward was granted for.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::rewards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RewardDB {
    pub id: String,
    pub confirmation_number: i64,
    pub account_number: String,
    pub reward_amount: String,
    pub dining_amount: String,
    pub credit_card_number: String,
    pub merchant_number: String,
    pub dining_occurred_at: String,
    pub rewarded_at: String,
}

/// One beneficiary's share of a reward.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::reward_distributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RewardDistributionDB {
    pub id: String,
    pub reward_id: String,
    pub beneficiary_name: String,
    pub amount: String,
    pub allocation_percentage: String,
    pub total_savings: String,
}

/// Converts one joined row into the flattened form the reconstruction
/// fold consumes. The distribution side is `None` for rewards without
/// distributions.
pub fn to_confirmation_row(
    reward: RewardDB,
    distribution: Option<RewardDistributionDB>,
) -> Result<ConfirmationRow> {
    let (beneficiary_name, distribution_amount, allocation_percentage, beneficiary_savings) =
        match distribution {
            Some(dist) => (
                Some(dist.beneficiary_name),
                Some(parse_money_column("amount", &dist.amount)?),
                Some(parse_percentage_column(
                    "allocation_percentage",
                    &dist.allocation_percentage,
                )?),
                Some(parse_money_column("total_savings", &dist.total_savings)?),
            ),
            None => (None, None, None, None),
        };

    Ok(ConfirmationRow {
        confirmation_number: reward.confirmation_number.to_string(),
        account_number: reward.account_number,
        reward_amount: parse_money_column("reward_amount", &reward.reward_amount)?,
        beneficiary_name,
        distribution_amount,
        allocation_percentage,
        beneficiary_savings,
    })
}
