//! Recipe catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, the query
//! engine, routes) so integration tests, the server binary and the import
//! tool can all reach them.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
