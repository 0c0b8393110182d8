//! Rewards Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the dining rewards
//! engine. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod errors;
pub mod money;
pub mod restaurants;
pub mod rewards;

// Re-export common types from the money and rewards modules
pub use money::*;
pub use rewards::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
