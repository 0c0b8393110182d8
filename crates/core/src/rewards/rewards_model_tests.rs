//! Tests for reward domain models.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::money::{Money, MoneyError, Percentage};
    use crate::rewards::{AccountContribution, Dining, Distribution, RewardConfirmation};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    // ==================== Dining Validation Tests ====================

    #[test]
    fn test_dining_accepts_valid_input() {
        let dining = create_dining();
        assert_eq!(dining.amount(), Money::new(dec!(100.00)));
        assert_eq!(dining.credit_card_number(), "1234123412341234");
        assert_eq!(dining.merchant_number(), "123457890");
    }

    #[test]
    fn test_dining_rejects_short_credit_card() {
        let result = Dining::new(
            Money::new(dec!(100.00)),
            "1234",
            "123457890",
            default_timestamp(),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_dining_rejects_non_numeric_credit_card() {
        let result = Dining::new(
            Money::new(dec!(100.00)),
            "1234abcd12341234",
            "123457890",
            default_timestamp(),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_dining_rejects_bad_merchant_number() {
        let result = Dining::new(
            Money::new(dec!(100.00)),
            "1234123412341234",
            "12345",
            default_timestamp(),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_dining_rejects_negative_amount() {
        let result = Dining::new(
            Money::new(dec!(-1.00)),
            "1234123412341234",
            "123457890",
            default_timestamp(),
        );
        assert!(matches!(
            result,
            Err(Error::Money(MoneyError::NegativeAmount(_)))
        ));
    }

    #[test]
    fn test_dining_accepts_zero_amount() {
        let result = Dining::new(
            Money::zero(),
            "1234123412341234",
            "123457890",
            default_timestamp(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_equal_dinings_compare_equal() {
        assert_eq!(create_dining(), create_dining());
    }

    #[test]
    fn test_dining_truncates_sub_second_precision() {
        let base = default_timestamp();
        let with_millis = Dining::new(
            Money::new(dec!(100.00)),
            "1234123412341234",
            "123457890",
            base + chrono::Duration::milliseconds(123),
        )
        .unwrap();
        assert_eq!(with_millis.occurred_at(), base);
        assert_eq!(with_millis, create_dining());
    }

    #[test]
    fn test_dinings_with_different_timestamps_differ() {
        let later = Dining::new(
            Money::new(dec!(100.00)),
            "1234123412341234",
            "123457890",
            Utc.with_ymd_and_hms(2024, 8, 16, 21, 0, 0).unwrap(),
        )
        .unwrap();
        assert_ne!(create_dining(), later);
    }

    #[test]
    fn test_dining_display_names_every_fingerprint_field() {
        let text = create_dining().to_string();
        assert!(text.contains("$100.00"));
        assert!(text.contains("1234123412341234"));
        assert!(text.contains("123457890"));
        assert!(text.contains("2024-08-16T19:30:00Z"));
    }

    // ==================== Contribution Tests ====================

    #[test]
    fn test_distribution_lookup_by_beneficiary() {
        let contribution = create_contribution();
        assert!(contribution.distribution_for("Annabelle").is_some());
        assert!(contribution.distribution_for("Nobody").is_none());
    }

    #[test]
    fn test_distributed_total_sums_all_shares() {
        let contribution = create_contribution();
        assert_eq!(contribution.distributed_total(), Money::new(dec!(8.00)));
    }

    #[test]
    fn test_confirmation_serializes_camel_case() {
        let confirmation = RewardConfirmation {
            confirmation_number: "1".to_string(),
            account_contribution: create_contribution(),
        };
        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["confirmationNumber"], "1");
        assert_eq!(json["accountContribution"]["accountNumber"], "123456789");
        assert_eq!(
            json["accountContribution"]["distributions"][0]["totalSavings"],
            "14.00"
        );
    }

    // ==================== Helper Functions ====================

    fn default_timestamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 16, 19, 30, 0).unwrap()
    }

    fn create_dining() -> Dining {
        Dining::new(
            Money::new(dec!(100.00)),
            "1234123412341234",
            "123457890",
            default_timestamp(),
        )
        .unwrap()
    }

    fn create_contribution() -> AccountContribution {
        let half = Percentage::from_ratio(dec!(0.5)).unwrap();
        AccountContribution {
            account_number: "123456789".to_string(),
            amount: Money::new(dec!(8.00)),
            distributions: vec![
                Distribution {
                    beneficiary: "Annabelle".to_string(),
                    amount: Money::new(dec!(4.00)),
                    percentage: half,
                    total_savings: Money::new(dec!(14.00)),
                },
                Distribution {
                    beneficiary: "Corgan".to_string(),
                    amount: Money::new(dec!(4.00)),
                    percentage: half,
                    total_savings: Money::new(dec!(9.00)),
                },
            ],
        }
    }
}
