//! SQLite storage implementation for reward confirmations.

mod model;
mod repository;

pub use model::{RewardDB, RewardDistributionDB};
pub use repository::RewardRepository;
