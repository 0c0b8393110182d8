/// Number of decimal places carried by every monetary amount.
pub const MONEY_SCALE: u32 = 2;

/// Number of decimal places shown when displaying a percentage.
pub const PERCENT_DISPLAY_SCALE: u32 = 0;
