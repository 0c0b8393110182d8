//! Database model for restaurants.

use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use rewards_core::errors::Result;
use rewards_core::restaurants::{BenefitAvailabilityPolicy, Restaurant};

use crate::utils::{corrupt_column, parse_percentage_column};

/// Database model for restaurants
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDB {
    pub id: String,
    pub merchant_number: String,
    pub name: String,
    pub benefit_percentage: String,
    pub benefit_availability_policy: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestaurantDB {
    /// Parses the stored row back into its domain form.
    pub fn to_domain(&self) -> Result<Restaurant> {
        let policy = BenefitAvailabilityPolicy::from_str(&self.benefit_availability_policy)
            .map_err(|e| {
                corrupt_column(
                    "benefit_availability_policy",
                    &self.benefit_availability_policy,
                    e,
                )
            })?;
        Ok(Restaurant {
            id: self.id.clone(),
            merchant_number: self.merchant_number.clone(),
            name: self.name.clone(),
            benefit_percentage: parse_percentage_column(
                "benefit_percentage",
                &self.benefit_percentage,
            )?,
            benefit_availability_policy: policy,
        })
    }
}
