//! Catalog query execution.
//!
//! Two mutually exclusive modes share one entry point:
//!
//! - **Listing**: no predicate, rating-descending order, one page plus the
//!   size of the whole collection.
//! - **Search**: a compiled conjunction, every match, no pagination and no
//!   ordering guarantee.
//!
//! Each execution issues exactly one store call. A store failure fails the
//! whole query; nothing is retried and no partial result is returned.

use catalog_core::error::CoreError;
use catalog_core::filter::{RecipeFilter, SearchCriteria};
use catalog_core::listing::Listing;
use catalog_core::pagination::PageRequest;
use catalog_db::models::recipe::Recipe;
use catalog_db::store::RecipeStore;

/// A fully parsed catalog query.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    Listing(PageRequest),
    Search(RecipeFilter),
}

impl CatalogQuery {
    /// Search mode over raw criteria. An empty filter is still a search:
    /// it returns the full collection, unpaginated.
    pub fn search(criteria: &SearchCriteria) -> Self {
        Self::Search(RecipeFilter::compile(criteria))
    }
}

/// Run a query against the store and shape the result.
pub async fn execute(
    store: &dyn RecipeStore,
    query: &CatalogQuery,
) -> Result<Listing<Recipe>, CoreError> {
    match query {
        CatalogQuery::Listing(page) => {
            let result = store.count_and_page(page.limit, page.offset()).await?;
            tracing::debug!(
                page = page.page,
                limit = page.limit,
                total = result.total,
                returned = result.rows.len(),
                "Listing page fetched",
            );
            Ok(Listing::Paginated {
                page: page.page,
                limit: page.limit,
                total: result.total,
                data: result.rows,
            })
        }
        CatalogQuery::Search(filter) => {
            let data = store.find_all(filter).await?;
            tracing::debug!(
                predicates = filter.predicates().len(),
                matched = data.len(),
                "Search executed",
            );
            Ok(Listing::Unpaginated { data })
        }
    }
}
