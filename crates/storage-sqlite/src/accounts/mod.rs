//! SQLite storage implementation for accounts.

mod model;
mod repository;

pub use model::{AccountBeneficiaryDB, AccountCreditCardDB, AccountDB};
pub use repository::AccountRepository;
