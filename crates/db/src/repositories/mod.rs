//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Store adapters wrap a pool and
//! delegate to them.

pub mod recipe_repo;

pub use recipe_repo::{PgRecipeStore, RecipeRepo};
