//! Pure query logic for the recipe catalog.
//!
//! Nothing in this crate touches the database: range parsing, filter
//! compilation, pagination arithmetic, the response envelope and recipe
//! input normalization are all plain functions over their inputs so they can
//! be shared by the API, the import tool and any store implementation.

pub mod error;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod range;
pub mod recipe;
pub mod types;
