use crate::errors::Result;
use crate::restaurants::restaurants_model::Restaurant;

/// Trait for restaurant repository operations
pub trait RestaurantRepositoryTrait: Send + Sync {
    /// Finds the participating restaurant with the given merchant number.
    fn find_by_merchant_number(&self, merchant_number: &str) -> Result<Option<Restaurant>>;
}
