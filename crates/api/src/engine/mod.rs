//! Query engine.
//!
//! Selects the execution mode for a catalog request, runs it against the
//! injected record store and shapes the result into a [`Listing`](catalog_core::listing::Listing).

pub mod catalog;
