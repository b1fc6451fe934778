//! Query parameter types for API handlers.
//!
//! Handlers extract the query string as decoded `(key, value)` pairs and
//! fold them into these types, so a repeated or unknown key never rejects
//! the request.

/// Listing pagination parameters (`?page=&limit=`).
///
/// Kept as raw strings: a non-numeric value falls back to the default
/// instead of rejecting the request. See
/// [`PageRequest::from_raw`](catalog_core::pagination::PageRequest::from_raw).
#[derive(Debug, Default, PartialEq)]
pub struct ListingParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListingParams {
    /// First `page` and first `limit` from the query pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page.get_or_insert(value),
                "limit" => params.limit.get_or_insert(value),
                _ => continue,
            };
        }
        params
    }
}
