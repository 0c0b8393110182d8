//! Duplicate reward reconciliation.

use super::rewards_model::RewardConfirmation;

/// Returns true when two confirmations describe the same recorded reward.
///
/// This is weaker than structural equality on purpose: a confirmation
/// reconstructed from a partial query may carry no distribution detail, in
/// which case agreement on the confirmation number, account, and amount is
/// accepted. When both sides carry distributions the sets must match
/// exactly, keyed by beneficiary name and independent of order.
pub fn is_equal_or_duplicate(a: &RewardConfirmation, b: &RewardConfirmation) -> bool {
    if a.confirmation_number != b.confirmation_number {
        return false;
    }

    let left = &a.account_contribution;
    let right = &b.account_contribution;
    if left.account_number != right.account_number || left.amount != right.amount {
        return false;
    }

    if left.distributions.is_empty() || right.distributions.is_empty() {
        return true;
    }

    left.distributions.len() == right.distributions.len()
        && left.distributions.iter().all(|d| {
            right
                .distribution_for(&d.beneficiary)
                .map(|other| other == d)
                .unwrap_or(false)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Money, Percentage};
    use crate::rewards::{AccountContribution, Distribution};
    use rust_decimal_macros::dec;

    fn confirmation(number: &str, distributions: Vec<Distribution>) -> RewardConfirmation {
        RewardConfirmation {
            confirmation_number: number.to_string(),
            account_contribution: AccountContribution {
                account_number: "123456789".to_string(),
                amount: Money::new(dec!(8.00)),
                distributions,
            },
        }
    }

    fn distribution(beneficiary: &str, amount: rust_decimal::Decimal) -> Distribution {
        Distribution {
            beneficiary: beneficiary.to_string(),
            amount: Money::new(amount),
            percentage: Percentage::from_ratio(dec!(0.5)).unwrap(),
            total_savings: Money::new(amount),
        }
    }

    #[test]
    fn test_different_confirmation_numbers_never_match() {
        let a = confirmation("100", vec![]);
        let b = confirmation("101", vec![]);
        assert!(!is_equal_or_duplicate(&a, &b));
    }

    #[test]
    fn test_header_agreement_suffices_when_detail_is_missing() {
        let bare = confirmation("100", vec![]);
        let detailed = confirmation(
            "100",
            vec![distribution("Annabelle", dec!(4.00)), distribution("Corgan", dec!(4.00))],
        );
        assert!(is_equal_or_duplicate(&bare, &detailed));
        assert!(is_equal_or_duplicate(&detailed, &bare));
    }

    #[test]
    fn test_matching_distribution_sets_compare_equal_in_any_order() {
        let forward = confirmation(
            "100",
            vec![distribution("Annabelle", dec!(4.00)), distribution("Corgan", dec!(4.00))],
        );
        let reversed = confirmation(
            "100",
            vec![distribution("Corgan", dec!(4.00)), distribution("Annabelle", dec!(4.00))],
        );
        assert!(is_equal_or_duplicate(&forward, &reversed));
    }

    #[test]
    fn test_diverging_distribution_detail_does_not_match() {
        let a = confirmation(
            "100",
            vec![distribution("Annabelle", dec!(4.00)), distribution("Corgan", dec!(4.00))],
        );
        let b = confirmation(
            "100",
            vec![distribution("Annabelle", dec!(5.00)), distribution("Corgan", dec!(3.00))],
        );
        assert!(!is_equal_or_duplicate(&a, &b));
    }

    #[test]
    fn test_differing_amounts_never_match() {
        let a = confirmation("100", vec![]);
        let mut b = confirmation("100", vec![]);
        b.account_contribution.amount = Money::new(dec!(9.00));
        assert!(!is_equal_or_duplicate(&a, &b));
    }
}
