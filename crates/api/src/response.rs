//! Response envelope for write endpoints.
//!
//! Listing and search responses use [`catalog_core::listing::Listing`].

use serde::Serialize;

/// `{ "message": ..., "data": T }` envelope returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
