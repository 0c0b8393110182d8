//! Restaurants module - domain models and traits.

mod restaurants_constants;
mod restaurants_model;
mod restaurants_traits;


pub use restaurants_constants::*;
pub use restaurants_model::{BenefitAvailabilityPolicy, Restaurant};
pub use restaurants_traits::RestaurantRepositoryTrait;
