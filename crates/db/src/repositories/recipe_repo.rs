//! Repository for the `recipes` table.
//!
//! Search filters are compiled into a parameterized `WHERE` clause: every
//! client-supplied value is bound, never interpolated. Column names come
//! only from the closed `TextField` / `NumericField` enums.

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::filter::{like_pattern, Predicate, RecipeFilter};
use catalog_core::recipe::NewRecipe;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::recipe::Recipe;
use crate::store::{RecipePage, RecipeStore};

/// Column list for `recipes` queries.
const COLUMNS: &str = "\
    id, cuisine, title, rating, prep_time, cook_time, total_time, \
    description, nutrients, serves, created_at, updated_at";

/// Listing order. Kept in step with the rating index.
const LISTING_ORDER: &str = "rating DESC NULLS LAST, id ASC";

/// A value bound into a compiled filter, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterBind {
    Text(String),
    Float(f64),
}

/// Compile a filter into a `WHERE` clause (empty for no predicates) and the
/// values to bind, numbered from `$1`.
pub fn where_clause(filter: &RecipeFilter) -> (String, Vec<FilterBind>) {
    let mut conditions = Vec::with_capacity(filter.predicates().len());
    let mut binds = Vec::new();
    let mut bind_idx = 1u32;

    for predicate in filter.predicates() {
        match predicate {
            Predicate::Contains { field, needle } => {
                conditions.push(format!("{} ILIKE ${bind_idx}", field.column()));
                binds.push(FilterBind::Text(like_pattern(needle)));
                bind_idx += 1;
            }
            Predicate::Compare { field, range } => {
                conditions.push(format!(
                    "{} {} ${bind_idx}",
                    field.column(),
                    range.op.as_sql()
                ));
                binds.push(FilterBind::Float(range.threshold));
                bind_idx += 1;
            }
            Predicate::NutrientContains { key, needle } => {
                conditions.push(format!(
                    "nutrients ->> ${bind_idx} ILIKE ${next_idx}",
                    next_idx = bind_idx + 1
                ));
                binds.push(FilterBind::Text(key.clone()));
                binds.push(FilterBind::Text(like_pattern(needle)));
                bind_idx += 2;
            }
        }
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, binds)
}

fn store_failure(err: sqlx::Error) -> CoreError {
    CoreError::StoreFailure(err.to_string())
}

/// Provides query and insert operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a recipe. The caller is responsible for validation.
    pub async fn create(pool: &PgPool, input: &NewRecipe) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipes (\
                cuisine, title, rating, prep_time, cook_time, total_time, \
                description, nutrients, serves\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(input.cuisine.as_deref())
            .bind(&input.title)
            .bind(input.rating)
            .bind(input.prep_time)
            .bind(input.cook_time)
            .bind(input.total_time)
            .bind(input.description.as_deref())
            .bind(input.nutrients.as_ref().map(Json))
            .bind(input.serves.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Count all recipes and fetch one listing page inside a single
    /// repeatable-read snapshot, so `total` and `rows` agree.
    pub async fn count_and_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<RecipePage, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(&mut *tx)
            .await?;

        let query =
            format!("SELECT {COLUMNS} FROM recipes ORDER BY {LISTING_ORDER} LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Recipe>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RecipePage {
            total: total.0,
            rows,
        })
    }

    /// Fetch every recipe matching the filter. No ordering is applied.
    pub async fn find_all(pool: &PgPool, filter: &RecipeFilter) -> Result<Vec<Recipe>, sqlx::Error> {
        let (where_clause, binds) = where_clause(filter);
        let query = format!("SELECT {COLUMNS} FROM recipes {where_clause}");
        tracing::debug!(%query, binds = binds.len(), "Running recipe search");

        let mut q = sqlx::query_as::<_, Recipe>(&query);
        for bind in binds {
            q = match bind {
                FilterBind::Text(s) => q.bind(s),
                FilterBind::Float(f) => q.bind(f),
            };
        }
        q.fetch_all(pool).await
    }

    /// Delete every recipe and reset the id sequence.
    pub async fn clear(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE recipes RESTART IDENTITY")
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// [`RecipeStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn count_and_page(&self, limit: i64, offset: i64) -> Result<RecipePage, CoreError> {
        RecipeRepo::count_and_page(&self.pool, limit, offset)
            .await
            .map_err(store_failure)
    }

    async fn find_all(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, CoreError> {
        RecipeRepo::find_all(&self.pool, filter)
            .await
            .map_err(store_failure)
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, CoreError> {
        recipe.ensure_valid()?;
        RecipeRepo::create(&self.pool, recipe)
            .await
            .map_err(store_failure)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(store_failure)
    }
}
