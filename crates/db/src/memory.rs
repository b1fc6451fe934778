//! In-process [`RecipeStore`].
//!
//! Evaluates compiled filters against records held in memory with the same
//! semantics as the SQL the Postgres repository generates: case-insensitive
//! literal substring matching, `NULL` never matching a comparison, and the
//! rating-descending, nulls-last listing order.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::filter::{contains_ignore_case, NumericField, Predicate, RecipeFilter, TextField};
use catalog_core::recipe::NewRecipe;
use tokio::sync::RwLock;

use crate::models::recipe::Recipe;
use crate::store::{RecipePage, RecipeStore};

/// Whether a recipe satisfies a single predicate.
pub fn matches(recipe: &Recipe, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Contains { field, needle } => {
            let value = match field {
                TextField::Title => Some(recipe.title.as_str()),
                TextField::Cuisine => recipe.cuisine.as_deref(),
            };
            value.is_some_and(|v| contains_ignore_case(v, needle))
        }
        Predicate::Compare { field, range } => {
            let value = match field {
                NumericField::Rating => recipe.rating,
                NumericField::TotalTime => recipe.total_time.map(f64::from),
            };
            value.is_some_and(|v| range.matches(v))
        }
        Predicate::NutrientContains { key, needle } => recipe
            .nutrient(key)
            .is_some_and(|v| contains_ignore_case(v, needle)),
    }
}

/// Whether a recipe satisfies every predicate of the conjunction.
pub fn matches_all(recipe: &Recipe, filter: &RecipeFilter) -> bool {
    filter.predicates().iter().all(|p| matches(recipe, p))
}

/// Listing order: rating descending, unrated last, then ascending id.
pub fn listing_order(a: &Recipe, b: &Recipe) -> Ordering {
    let by_rating = match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rating.then(a.id.cmp(&b.id))
}

/// Recipe store held entirely in memory.
pub struct MemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
    next_id: AtomicI64,
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored recipes.
    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn count_and_page(&self, limit: i64, offset: i64) -> Result<RecipePage, CoreError> {
        let recipes = self.recipes.read().await;
        let mut ordered: Vec<&Recipe> = recipes.iter().collect();
        ordered.sort_by(|a, b| listing_order(a, b));

        let rows = ordered
            .into_iter()
            .skip(usize::try_from(offset.max(0)).unwrap_or(usize::MAX))
            .take(usize::try_from(limit.max(0)).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(RecipePage {
            total: recipes.len() as i64,
            rows,
        })
    }

    async fn find_all(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, CoreError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| matches_all(r, filter))
            .cloned()
            .collect())
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, CoreError> {
        recipe.ensure_valid()?;
        let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        let record = Recipe::from_new(id, recipe, chrono::Utc::now());
        self.recipes.write().await.push(record.clone());
        Ok(record)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
