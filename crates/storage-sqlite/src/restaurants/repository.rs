use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use rewards_core::errors::Result;
use rewards_core::restaurants::{Restaurant, RestaurantRepositoryTrait};

use super::model::RestaurantDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::restaurants;
use crate::utils::format_timestamp;

/// Repository for managing restaurant data in the database
pub struct RestaurantRepository {
    pool: Arc<DbPool>,
}

impl RestaurantRepository {
    /// Creates a new RestaurantRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Inserts a restaurant, generating a fresh row id.
    pub fn create(&self, restaurant: &Restaurant) -> Result<Restaurant> {
        let mut conn = get_connection(&self.pool)?;

        let restaurant_id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());
        let row = RestaurantDB {
            id: restaurant_id.clone(),
            merchant_number: restaurant.merchant_number.clone(),
            name: restaurant.name.clone(),
            benefit_percentage: restaurant.benefit_percentage.as_decimal().to_string(),
            benefit_availability_policy: restaurant
                .benefit_availability_policy
                .as_str()
                .to_string(),
            created_at: now.clone(),
            updated_at: now,
        };

        diesel::insert_into(restaurants::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Restaurant {
            id: restaurant_id,
            ..restaurant.clone()
        })
    }
}

impl RestaurantRepositoryTrait for RestaurantRepository {
    fn find_by_merchant_number(&self, merchant_number: &str) -> Result<Option<Restaurant>> {
        let mut conn = get_connection(&self.pool)?;

        let row = restaurants::table
            .filter(restaurants::merchant_number.eq(merchant_number))
            .select(RestaurantDB::as_select())
            .first::<RestaurantDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => row.to_domain().map(Some),
            None => Ok(None),
        }
    }
}
