//! Money module - monetary amounts and percentages.

mod money_constants;
mod money_errors;
mod money_model;


pub use money_constants::*;
pub use money_errors::MoneyError;
pub use money_model::{Money, Percentage};
