//! The record store seam.
//!
//! The query engine only ever talks to a `dyn RecipeStore`. Production wires
//! in [`PgRecipeStore`](crate::repositories::PgRecipeStore); tests and local
//! tooling can use [`MemoryRecipeStore`](crate::memory::MemoryRecipeStore).
//! Every implementation reports failures as `CoreError::StoreFailure`, except
//! `create`, which rejects untitled records with `CoreError::Validation`.

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::filter::RecipeFilter;
use catalog_core::recipe::NewRecipe;

use crate::models::recipe::Recipe;

/// One page of the unfiltered collection plus the collection size, read
/// from a single consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePage {
    pub total: i64,
    pub rows: Vec<Recipe>,
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Page through every recipe ordered by rating descending. Null ratings
    /// sort after all rated recipes; ties break on ascending `id`.
    async fn count_and_page(&self, limit: i64, offset: i64) -> Result<RecipePage, CoreError>;

    /// Every recipe matching the conjunction, in no guaranteed order.
    async fn find_all(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, CoreError>;

    /// Persist a new recipe and return it with its assigned id.
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, CoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}
