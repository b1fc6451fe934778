//! Recipe row model.

use catalog_core::recipe::{NewRecipe, Nutrients};
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `recipes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Recipe {
    pub id: DbId,
    pub cuisine: Option<String>,
    pub title: String,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub nutrients: Option<Json<Nutrients>>,
    pub serves: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Materialize a new record the way the database would on insert.
    pub fn from_new(id: DbId, input: &NewRecipe, now: Timestamp) -> Self {
        Self {
            id,
            cuisine: input.cuisine.clone(),
            title: input.title.clone(),
            rating: input.rating,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            total_time: input.total_time,
            description: input.description.clone(),
            nutrients: input.nutrients.clone().map(Json),
            serves: input.serves.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Text value stored under `key` in the nutrients document.
    pub fn nutrient(&self, key: &str) -> Option<&str> {
        self.nutrients
            .as_ref()
            .and_then(|n| n.0.get(key))
            .map(String::as_str)
    }
}
