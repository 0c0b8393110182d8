//! Reconstruction of reward confirmations from flattened result rows.
//!
//! The confirmation query joins the reward header to its distribution
//! rows, yielding one row per distribution, or a single row with null
//! distribution columns when a reward has none. Grouping those rows back
//! into nested confirmations is an explicit fold over the ordered rows,
//! keyed on the confirmation number.

use crate::money::{Money, Percentage};

use super::rewards_model::{AccountContribution, Distribution, RewardConfirmation};

/// One flattened row of the confirmation join. Header columns repeat on
/// every row of the same reward; distribution columns are all present or
/// all null.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationRow {
    pub confirmation_number: String,
    pub account_number: String,
    pub reward_amount: Money,
    pub beneficiary_name: Option<String>,
    pub distribution_amount: Option<Money>,
    pub allocation_percentage: Option<Percentage>,
    pub beneficiary_savings: Option<Money>,
}

/// Groups ordered join rows into confirmations, preserving first-seen order.
///
/// Rows belonging to the same confirmation must be adjacent; the query
/// guarantees that by ordering on the confirmation number. A row whose
/// confirmation number differs from the current group's closes the group
/// and opens a new one; a non-null beneficiary column appends one
/// distribution to the current group.
pub fn group_confirmations(rows: Vec<ConfirmationRow>) -> Vec<RewardConfirmation> {
    let mut confirmations: Vec<RewardConfirmation> = Vec::new();

    for row in rows {
        let starts_new_group = confirmations
            .last()
            .map(|current| current.confirmation_number != row.confirmation_number)
            .unwrap_or(true);
        if starts_new_group {
            confirmations.push(RewardConfirmation {
                confirmation_number: row.confirmation_number.clone(),
                account_contribution: AccountContribution {
                    account_number: row.account_number.clone(),
                    amount: row.reward_amount,
                    distributions: Vec::new(),
                },
            });
        }

        if let (Some(beneficiary), Some(amount), Some(percentage), Some(total_savings)) = (
            row.beneficiary_name,
            row.distribution_amount,
            row.allocation_percentage,
            row.beneficiary_savings,
        ) {
            if let Some(current) = confirmations.last_mut() {
                current.account_contribution.distributions.push(Distribution {
                    beneficiary,
                    amount,
                    percentage,
                    total_savings,
                });
            }
        }
    }

    confirmations
}
