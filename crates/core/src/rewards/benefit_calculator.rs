//! Benefit calculation for dining events.

use crate::accounts::Account;
use crate::money::Money;
use crate::restaurants::Restaurant;

use super::rewards_model::Dining;

/// Computes the monetary benefit a dining event earns.
///
/// The restaurant's availability policy gates the calculation: an
/// ineligible dining earns a zero benefit, not an error. An eligible one
/// earns the dining amount multiplied by the restaurant's benefit
/// percentage, rounded half-up to cents.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenefitCalculator;

impl BenefitCalculator {
    pub fn calculate(&self, restaurant: &Restaurant, account: &Account, dining: &Dining) -> Money {
        if !restaurant.is_benefit_available_for(account, dining) {
            return Money::zero();
        }
        dining.amount().multiply_by(restaurant.benefit_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Percentage;
    use crate::restaurants::BenefitAvailabilityPolicy;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn account() -> Account {
        Account {
            id: "a1".to_string(),
            number: "123456789".to_string(),
            name: "Keith and Keri Donald".to_string(),
            beneficiaries: vec![],
        }
    }

    fn restaurant(policy: BenefitAvailabilityPolicy) -> Restaurant {
        Restaurant {
            id: "r1".to_string(),
            merchant_number: "123457890".to_string(),
            name: "AppleBees".to_string(),
            benefit_percentage: Percentage::from_ratio(dec!(0.08)).unwrap(),
            benefit_availability_policy: policy,
        }
    }

    fn saturday_dining() -> Dining {
        Dining::new(
            Money::new(dec!(100.00)),
            "1234123412341234",
            "123457890",
            Utc.with_ymd_and_hms(2024, 8, 17, 19, 30, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_available_benefit_is_amount_times_percentage() {
        let calculator = BenefitCalculator;
        let benefit = calculator.calculate(
            &restaurant(BenefitAvailabilityPolicy::Always),
            &account(),
            &saturday_dining(),
        );
        assert_eq!(benefit, Money::new(dec!(8.00)));
    }

    #[test]
    fn test_unavailable_benefit_is_zero() {
        let calculator = BenefitCalculator;
        let benefit = calculator.calculate(
            &restaurant(BenefitAvailabilityPolicy::Never),
            &account(),
            &saturday_dining(),
        );
        assert!(benefit.is_zero());
    }

    #[test]
    fn test_weekday_policy_gates_weekend_dining() {
        let calculator = BenefitCalculator;
        let benefit = calculator.calculate(
            &restaurant(BenefitAvailabilityPolicy::Weekdays),
            &account(),
            &saturday_dining(),
        );
        assert!(benefit.is_zero());
    }
}
