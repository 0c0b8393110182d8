//! Utility functions for SQLite storage operations.
//!
//! Money, percentage, and timestamp values are stored as TEXT columns.
//! These helpers parse them back strictly: a column that does not parse is
//! corrupt data and surfaces as an error rather than a silent zero.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use rewards_core::errors::{DatabaseError, Error, Result};
use rewards_core::money::{Money, Percentage};

/// Error for a TEXT column whose content no longer parses.
pub fn corrupt_column(column: &str, value: &str, err: impl fmt::Display) -> Error {
    Error::Database(DatabaseError::Internal(format!(
        "stored {} '{}' is unreadable: {}",
        column, value, err
    )))
}

/// Parses a TEXT money column such as `"8.00"`.
pub fn parse_money_column(column: &str, value: &str) -> Result<Money> {
    let amount: Decimal = value
        .parse()
        .map_err(|e| corrupt_column(column, value, e))?;
    Ok(Money::new(amount))
}

/// Parses a TEXT percentage column holding a bare ratio such as `"0.5"`.
pub fn parse_percentage_column(column: &str, value: &str) -> Result<Percentage> {
    let ratio: Decimal = value
        .parse()
        .map_err(|e| corrupt_column(column, value, e))?;
    Percentage::from_ratio(ratio).map_err(|e| corrupt_column(column, value, e))
}

/// The canonical TEXT form for timestamps: RFC 3339, whole seconds, UTC.
///
/// Dining fingerprint lookups compare this text byte for byte, so every
/// timestamp write must go through here.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
