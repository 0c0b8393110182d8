//! Restaurant domain models.

use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::money::Percentage;
use crate::restaurants::restaurants_constants::policy_codes;
use crate::rewards::Dining;

/// Determines whether the benefit is available for a given dining event.
///
/// The set of policies is closed; adding one means adding a variant here
/// and handling it in the match arms below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenefitAvailabilityPolicy {
    /// The benefit is always awarded.
    #[default]
    Always,
    /// The benefit is never awarded.
    Never,
    /// The benefit is awarded Monday through Friday only, judged by the
    /// dining timestamp's UTC weekday.
    Weekdays,
}

impl BenefitAvailabilityPolicy {
    /// Evaluates the policy for one dining event.
    pub fn is_available(&self, _account: &Account, dining: &Dining) -> bool {
        match self {
            BenefitAvailabilityPolicy::Always => true,
            BenefitAvailabilityPolicy::Never => false,
            BenefitAvailabilityPolicy::Weekdays => {
                dining.occurred_at().weekday().number_from_monday() <= 5
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitAvailabilityPolicy::Always => policy_codes::ALWAYS,
            BenefitAvailabilityPolicy::Never => policy_codes::NEVER,
            BenefitAvailabilityPolicy::Weekdays => policy_codes::WEEKDAYS,
        }
    }
}

impl FromStr for BenefitAvailabilityPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == policy_codes::ALWAYS => Ok(BenefitAvailabilityPolicy::Always),
            s if s == policy_codes::NEVER => Ok(BenefitAvailabilityPolicy::Never),
            s if s == policy_codes::WEEKDAYS => Ok(BenefitAvailabilityPolicy::Weekdays),
            _ => Err(format!("Unknown benefit availability policy: {}", s)),
        }
    }
}

/// Domain model representing a participating restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub merchant_number: String,
    pub name: String,
    pub benefit_percentage: Percentage,
    pub benefit_availability_policy: BenefitAvailabilityPolicy,
}

impl Restaurant {
    /// Returns true if this restaurant's policy awards the benefit for the
    /// given account and dining event.
    pub fn is_benefit_available_for(&self, account: &Account, dining: &Dining) -> bool {
        self.benefit_availability_policy.is_available(account, dining)
    }
}
