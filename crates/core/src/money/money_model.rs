//! Monetary amount and percentage value objects.
//!
//! Both types wrap `rust_decimal::Decimal` so arithmetic is exact; floats
//! never touch money. Amounts carry a fixed scale of two decimal places,
//! with half-up rounding applied at construction and multiplication.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::money_constants::{MONEY_SCALE, PERCENT_DISPLAY_SCALE};
use super::money_errors::MoneyError;

/// A monetary amount with a fixed scale of two decimal places.
///
/// Values are normalized at construction, so two amounts representing the
/// same quantity always compare equal and render identically (`"8.00"`).
/// Negative amounts are representable; call sites that require non-negative
/// amounts enforce that themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new amount, rounding half-up to the canonical two-place scale.
    pub fn new(amount: Decimal) -> Self {
        let mut amount =
            amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(MONEY_SCALE);
        Self { amount }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { amount: dec!(0.00) }
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies by a percentage, rounding the product half-up to cents.
    pub fn multiply_by(&self, percentage: Percentage) -> Money {
        Money::new(self.amount * percentage.as_decimal())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.amount
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount - other.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: Decimal = s.trim().parse().map_err(|_| MoneyError::invalid_format(s))?;
        Ok(Money::new(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount)
    }
}

/// A percentage expressed as a ratio in the closed range `[0, 1]`.
///
/// The stored ratio keeps whatever precision it was given (`0.3333` stays
/// `0.3333`); only [`fmt::Display`] rounds, to the nearest whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage {
    ratio: Decimal,
}

impl Percentage {
    /// Creates a percentage from a ratio, rejecting values outside `[0, 1]`.
    pub fn from_ratio(ratio: Decimal) -> Result<Self, MoneyError> {
        if ratio < Decimal::ZERO || ratio > Decimal::ONE {
            return Err(MoneyError::illegal_value(format!(
                "percentage must be between 0 and 1, got {ratio}"
            )));
        }
        Ok(Self { ratio })
    }

    /// The zero percentage.
    pub fn zero() -> Self {
        Self { ratio: Decimal::ZERO }
    }

    /// Returns the ratio as a decimal in `[0, 1]`.
    pub fn as_decimal(&self) -> Decimal {
        self.ratio
    }

    /// Returns the ratio as an `f64`, for display-adjacent uses only.
    pub fn as_f64(&self) -> f64 {
        self.ratio.to_f64().unwrap_or_default()
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = MoneyError;

    fn try_from(ratio: Decimal) -> Result<Self, Self::Error> {
        Percentage::from_ratio(ratio)
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Self {
        percentage.ratio
    }
}

impl FromStr for Percentage {
    type Err = MoneyError;

    /// Parses either a percent form (`"50%"`) or a bare ratio (`"0.5"`).
    ///
    /// A bare number greater than one (`"50"`) is treated as a percentage
    /// written without its `%` sign and rejected as an illegal value, not
    /// as a format error. Malformed text (`"abc"`, a doubled `%`) is a
    /// format error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyError::illegal_value("empty percentage"));
        }
        if let Some(stripped) = text.strip_suffix('%') {
            let percent: Decimal = stripped
                .trim()
                .parse()
                .map_err(|_| MoneyError::invalid_format(s))?;
            Percentage::from_ratio(percent / dec!(100))
        } else {
            let ratio: Decimal = text.parse().map_err(|_| MoneyError::invalid_format(s))?;
            Percentage::from_ratio(ratio)
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = (self.ratio * dec!(100))
            .round_dp_with_strategy(PERCENT_DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{percent}%")
    }
}
