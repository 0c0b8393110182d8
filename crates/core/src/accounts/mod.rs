//! Accounts module - domain models and traits.

mod accounts_model;
mod accounts_traits;


pub use accounts_model::{Account, Beneficiary};
pub use accounts_traits::AccountRepositoryTrait;
