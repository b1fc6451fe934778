//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create DTOs live in `catalog_core`, where they are
//! normalized and validated before reaching a store.

pub mod recipe;
