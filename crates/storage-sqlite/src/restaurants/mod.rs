//! SQLite storage implementation for restaurants.

mod model;
mod repository;

pub use model::RestaurantDB;
pub use repository::RestaurantRepository;
