use crate::accounts::accounts_model::Account;
use crate::errors::Result;

/// Trait for account repository operations
pub trait AccountRepositoryTrait: Send + Sync {
    /// Finds the account that owns the given credit card number.
    fn find_by_credit_card(&self, credit_card_number: &str) -> Result<Option<Account>>;

    /// Persists the account's current beneficiary savings totals.
    fn update_beneficiaries(&self, account: &Account) -> Result<()>;
}
