//! Contribution distribution across account beneficiaries.
//!
//! Each beneficiary's tentative share is the contribution multiplied by
//! their allocation percentage, rounded half-up to cents. The rounding
//! remainder is then applied in full to a single beneficiary so the final
//! shares sum to the contribution exactly. No cent is created or destroyed.

use rust_decimal::Decimal;

use crate::accounts::{Account, Beneficiary};
use crate::errors::{Result, ValidationError};
use crate::money::Money;

use super::rewards_errors::RewardError;
use super::rewards_model::{AccountContribution, Distribution};

/// The result of distributing a contribution: the contribution record plus
/// a new account snapshot carrying the updated beneficiary savings totals.
#[derive(Debug, Clone)]
pub struct DistributionOutcome {
    pub account: Account,
    pub contribution: AccountContribution,
}

/// Splits a contribution among an account's beneficiaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContributionDistributor;

impl ContributionDistributor {
    /// Distributes `total` across the account's beneficiaries.
    ///
    /// The input account is never modified; the outcome carries a snapshot
    /// with each beneficiary's savings credited by their final share. With
    /// no beneficiaries the contribution carries no distributions and the
    /// account retains the whole amount. With at least one beneficiary the
    /// whole amount is distributed, so under-allocated accounts see the
    /// shortfall ride the remainder to the largest allocation.
    pub fn distribute(&self, account: &Account, total: Money) -> Result<DistributionOutcome> {
        if total.is_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "cannot distribute a negative contribution: {}",
                total
            ))
            .into());
        }

        let allocated: Decimal = account
            .beneficiaries
            .iter()
            .map(|b| b.allocation_percentage.as_decimal())
            .sum();
        if allocated > Decimal::ONE {
            return Err(RewardError::InvariantViolation(format!(
                "beneficiary allocations for account {} exceed 100%: {}",
                account.number, allocated
            ))
            .into());
        }

        if account.beneficiaries.is_empty() {
            return Ok(DistributionOutcome {
                account: account.clone(),
                contribution: AccountContribution {
                    account_number: account.number.clone(),
                    amount: total,
                    distributions: Vec::new(),
                },
            });
        }

        let shares = exact_shares(&account.beneficiaries, total);

        let mut updated = Vec::with_capacity(account.beneficiaries.len());
        let mut distributions = Vec::with_capacity(account.beneficiaries.len());
        for (beneficiary, share) in account.beneficiaries.iter().zip(shares) {
            let credited = beneficiary.credit(share);
            if !share.is_zero() {
                distributions.push(Distribution {
                    beneficiary: beneficiary.name.clone(),
                    amount: share,
                    percentage: beneficiary.allocation_percentage,
                    total_savings: credited.savings,
                });
            }
            updated.push(credited);
        }

        Ok(DistributionOutcome {
            account: Account {
                beneficiaries: updated,
                ..account.clone()
            },
            contribution: AccountContribution {
                account_number: account.number.clone(),
                amount: total,
                distributions,
            },
        })
    }
}

/// Computes one final share per beneficiary, in input order.
///
/// The remainder recipient is the beneficiary with the largest allocation
/// percentage, ties broken by ascending name, which makes the assignment
/// deterministic for identical inputs. The remainder can be negative when
/// every tentative share rounded up; the recipient absorbs it either way
/// so the totals stay exact.
fn exact_shares(beneficiaries: &[Beneficiary], total: Money) -> Vec<Money> {
    let mut shares: Vec<Money> = beneficiaries
        .iter()
        .map(|b| total.multiply_by(b.allocation_percentage))
        .collect();

    let assigned: Money = shares.iter().copied().sum();
    let remainder = total - assigned;
    if !remainder.is_zero() {
        let mut recipient = 0;
        for (index, candidate) in beneficiaries.iter().enumerate().skip(1) {
            let current = &beneficiaries[recipient];
            let takes_precedence = candidate.allocation_percentage > current.allocation_percentage
                || (candidate.allocation_percentage == current.allocation_percentage
                    && candidate.name < current.name);
            if takes_precedence {
                recipient = index;
            }
        }
        shares[recipient] = shares[recipient] + remainder;
    }

    shares
}
