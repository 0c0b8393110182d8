/// Length of a valid credit card number.
pub const CREDIT_CARD_NUMBER_LENGTH: usize = 16;

/// Length of a valid merchant number.
pub const MERCHANT_NUMBER_LENGTH: usize = 9;

/// Length of a valid account number.
pub const ACCOUNT_NUMBER_LENGTH: usize = 9;
