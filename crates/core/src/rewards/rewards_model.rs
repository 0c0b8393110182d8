//! Reward domain models.

use std::fmt;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::money::{Money, MoneyError, Percentage};

use super::rewards_constants::{CREDIT_CARD_NUMBER_LENGTH, MERCHANT_NUMBER_LENGTH};

/// A single dining event: the charge amount, the paying card, the merchant,
/// and when it happened. Together these four fields identify a unique reward
/// opportunity, so the type is immutable and equality covers all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dining {
    amount: Money,
    credit_card_number: String,
    merchant_number: String,
    occurred_at: DateTime<Utc>,
}

impl Dining {
    /// Creates a dining event, validating the card and merchant numbers and
    /// rejecting negative amounts.
    ///
    /// The timestamp is truncated to whole seconds, the same granularity the
    /// persisted fingerprint carries, so two equal dinings always look up the
    /// same confirmation.
    pub fn new(
        amount: Money,
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self> {
        let credit_card_number = credit_card_number.into();
        let merchant_number = merchant_number.into();

        if amount.is_negative() {
            return Err(MoneyError::NegativeAmount(amount.to_string()).into());
        }
        validate_digits("credit card number", &credit_card_number, CREDIT_CARD_NUMBER_LENGTH)?;
        validate_digits("merchant number", &merchant_number, MERCHANT_NUMBER_LENGTH)?;

        Ok(Self {
            amount,
            credit_card_number,
            merchant_number,
            occurred_at: occurred_at.trunc_subsecs(0),
        })
    }

    /// The amount charged for the dining.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The credit card number that paid for the dining.
    pub fn credit_card_number(&self) -> &str {
        &self.credit_card_number
    }

    /// The merchant number of the restaurant.
    pub fn merchant_number(&self) -> &str {
        &self.merchant_number
    }

    /// When the dining occurred.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl fmt::Display for Dining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dining of {} by card {} at merchant {} on {}",
            self.amount,
            self.credit_card_number,
            self.merchant_number,
            self.occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

fn validate_digits(field: &str, value: &str, expected_length: usize) -> Result<()> {
    if value.len() != expected_length || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be exactly {} digits, got '{}'",
            field, expected_length, value
        ))
        .into());
    }
    Ok(())
}

/// One beneficiary's share of a contribution, recorded with the allocation
/// percentage that produced it and the beneficiary's savings total after
/// the share was credited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub beneficiary: String,
    pub amount: Money,
    pub percentage: Percentage,
    pub total_savings: Money,
}

/// The total monetary benefit contributed to an account for one dining
/// event, split into per-beneficiary distributions.
///
/// When `distributions` is non-empty its amounts sum to `amount` exactly.
/// The list is empty when the account has no beneficiaries, in which case
/// it retains the whole contribution itself, or when nothing was
/// distributed because the benefit came to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContribution {
    pub account_number: String,
    pub amount: Money,
    pub distributions: Vec<Distribution>,
}

impl AccountContribution {
    /// Looks up the distribution for a beneficiary by name.
    pub fn distribution_for(&self, beneficiary: &str) -> Option<&Distribution> {
        self.distributions.iter().find(|d| d.beneficiary == beneficiary)
    }

    /// Sums the distributed amounts.
    pub fn distributed_total(&self) -> Money {
        self.distributions.iter().map(|d| d.amount).sum()
    }
}

/// The durable record of a completed reward: a unique confirmation number
/// and the contribution it confirmed. Instances are immutable once issued;
/// a later lookup reconstructs an equal but distinct value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardConfirmation {
    pub confirmation_number: String,
    pub account_contribution: AccountContribution,
}
