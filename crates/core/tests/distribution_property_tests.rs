//! Property-based integration tests for contribution distribution.
//!
//! These tests verify that universal properties of the distribution
//! algorithm hold across all valid inputs, using the `proptest` crate
//! for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

use rewards_core::accounts::{Account, Beneficiary};
use rewards_core::money::{Money, Percentage};
use rewards_core::rewards::ContributionDistributor;

// =============================================================================
// Generators
// =============================================================================

const NAMES: [&str; 8] = [
    "Annabelle", "Benjamin", "Corgan", "Dana", "Elise", "Franklin", "Greta", "Henry",
];

/// Generates a money amount between `min_cents` and $10,000.00, in whole
/// cents.
fn arb_total(min_cents: i64) -> impl Strategy<Value = Money> {
    (min_cents..=1_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Generates an account with 1 to 8 uniquely named beneficiaries whose
/// allocations sum to at most 100%.
fn arb_account() -> impl Strategy<Value = Account> {
    proptest::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len()).prop_flat_map(|names| {
        let count = names.len();
        // Capping each basis-point weight keeps the combined allocation
        // within 100%
        let weight_cap = 10_000u32 / count as u32;
        (
            Just(names),
            proptest::collection::vec(0..=weight_cap, count),
            proptest::collection::vec(0i64..=100_000, count),
        )
            .prop_map(|(names, weights, savings)| {
                let beneficiaries = names
                    .iter()
                    .zip(weights.iter().zip(savings.iter()))
                    .map(|(name, (weight, cents))| Beneficiary {
                        name: (*name).to_string(),
                        allocation_percentage: Percentage::from_ratio(Decimal::new(
                            i64::from(*weight),
                            4,
                        ))
                        .unwrap(),
                        savings: Money::new(Decimal::new(*cents, 2)),
                    })
                    .collect();
                Account {
                    id: "a1".to_string(),
                    number: "123456789".to_string(),
                    name: "Property Household".to_string(),
                    beneficiaries,
                }
            })
    })
}

fn share_for(account: &Account, outcome_name: &str) -> Money {
    account
        .beneficiary(outcome_name)
        .map(|b| b.savings)
        .unwrap_or_else(Money::zero)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: rewards-distribution, Property 1: The total is conserved**
    ///
    /// Whenever any distribution is emitted, the emitted shares sum to the
    /// contribution total exactly. No cent is created or destroyed by
    /// rounding.
    #[test]
    fn prop_distribution_conserves_the_total(
        account in arb_account(),
        total in arb_total(0),
    ) {
        let outcome = ContributionDistributor.distribute(&account, total).unwrap();
        let contribution = &outcome.contribution;

        prop_assert_eq!(contribution.amount, total);
        if contribution.distributions.is_empty() {
            prop_assert!(
                total.is_zero(),
                "only a zero contribution may distribute nothing, got {}",
                total
            );
        } else {
            prop_assert_eq!(
                contribution.distributed_total(),
                total,
                "distributed shares must sum to the contribution"
            );
        }
    }

    /// **Feature: rewards-distribution, Property 2: Savings reflect the shares**
    ///
    /// In the returned account snapshot every beneficiary's savings equal
    /// their previous savings plus their emitted share (or plus nothing when
    /// no share was emitted for them), and each recorded running total
    /// matches the snapshot.
    #[test]
    fn prop_snapshot_savings_equal_old_savings_plus_share(
        account in arb_account(),
        total in arb_total(0),
    ) {
        let outcome = ContributionDistributor.distribute(&account, total).unwrap();

        for before in &account.beneficiaries {
            let share = outcome
                .contribution
                .distribution_for(&before.name)
                .map(|d| d.amount)
                .unwrap_or_else(Money::zero);
            prop_assert_eq!(
                share_for(&outcome.account, &before.name),
                before.savings + share,
                "savings for {} must grow by exactly their share",
                &before.name
            );
        }
        for distribution in &outcome.contribution.distributions {
            prop_assert_eq!(
                distribution.total_savings,
                share_for(&outcome.account, &distribution.beneficiary)
            );
        }
    }

    /// **Feature: rewards-distribution, Property 3: Emitted shares are meaningful**
    ///
    /// Every emitted distribution names a distinct account beneficiary,
    /// carries a non-zero amount, and echoes that beneficiary's allocation
    /// percentage.
    #[test]
    fn prop_emitted_distributions_name_distinct_beneficiaries(
        account in arb_account(),
        total in arb_total(0),
    ) {
        let outcome = ContributionDistributor.distribute(&account, total).unwrap();

        let mut seen: HashSet<&str> = HashSet::new();
        for distribution in &outcome.contribution.distributions {
            prop_assert!(!distribution.amount.is_zero(), "zero shares are never emitted");
            prop_assert!(
                seen.insert(&distribution.beneficiary),
                "beneficiary {} appears twice",
                &distribution.beneficiary
            );
            let beneficiary = account.beneficiary(&distribution.beneficiary);
            prop_assert!(beneficiary.is_some(), "share for an unknown beneficiary");
            prop_assert_eq!(
                distribution.percentage,
                beneficiary.unwrap().allocation_percentage
            );
        }
    }

    /// **Feature: rewards-distribution, Property 4: Dollar totals never go negative**
    ///
    /// For contributions of at least $1.00 the rounding remainder is always
    /// small enough that no beneficiary's share dips below zero.
    #[test]
    fn prop_shares_stay_non_negative_for_dollar_totals(
        account in arb_account(),
        total in arb_total(100),
    ) {
        let outcome = ContributionDistributor.distribute(&account, total).unwrap();

        for distribution in &outcome.contribution.distributions {
            prop_assert!(
                !distribution.amount.is_negative(),
                "share {} for {} went negative on a {} contribution",
                distribution.amount,
                &distribution.beneficiary,
                total
            );
        }
    }

    /// **Feature: rewards-distribution, Property 5: Distribution is deterministic**
    ///
    /// Distributing the same contribution over the same account twice
    /// produces identical contributions and identical snapshots.
    #[test]
    fn prop_distribution_is_deterministic(
        account in arb_account(),
        total in arb_total(0),
    ) {
        let first = ContributionDistributor.distribute(&account, total).unwrap();
        let second = ContributionDistributor.distribute(&account, total).unwrap();

        prop_assert_eq!(first.contribution, second.contribution);
        prop_assert_eq!(first.account, second.account);
    }

    /// **Feature: rewards-distribution, Property 6: The input account is a snapshot source only**
    ///
    /// A zero contribution emits nothing and returns a snapshot equal to the
    /// input account.
    #[test]
    fn prop_zero_total_changes_nothing(
        account in arb_account(),
    ) {
        let outcome = ContributionDistributor.distribute(&account, Money::zero()).unwrap();

        prop_assert!(outcome.contribution.distributions.is_empty());
        prop_assert_eq!(outcome.account, account);
    }
}
