//! Catalog repository collaborator.
//!
//! The repository is constructed explicitly and passed where it is needed;
//! there is no module-level client instance. The in-memory implementation
//! serves snapshot data and applies the same visibility rules the content
//! service would (draft mode widens visibility to drafts).

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::DomainResult;

use crate::product::Product;

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    TitleAsc,
    TitleDesc,
}

/// Filters for catalog listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
    /// Exact category membership.
    pub category: Option<String>,
    pub sort: ProductSort,
}

/// Read access to the product catalog.
pub trait CatalogRepository {
    /// Look up a single product by slug.
    ///
    /// With `draft` set, draft products are visible too (preview mode);
    /// otherwise only published products are returned. Archived products are
    /// never returned.
    fn find_by_slug(&self, slug: &str, draft: bool) -> DomainResult<Option<Product>>;

    /// List published products matching `query`, sorted per `query.sort`.
    fn find_all(&self, query: &ProductQuery) -> DomainResult<Vec<Product>>;
}

/// Catalog backed by an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    if product.title.to_lowercase().contains(&needle) {
        return true;
    }
    product
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
}

impl CatalogRepository for InMemoryCatalog {
    fn find_by_slug(&self, slug: &str, draft: bool) -> DomainResult<Option<Product>> {
        let found = self
            .products
            .iter()
            .find(|p| p.slug == slug && p.is_visible(draft))
            .cloned();
        debug!(slug, draft, found = found.is_some(), "catalog slug lookup");
        Ok(found)
    }

    fn find_all(&self, query: &ProductQuery) -> DomainResult<Vec<Product>> {
        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_visible(false))
            .filter(|p| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|needle| matches_search(p, needle))
            })
            .filter(|p| {
                query
                    .category
                    .as_deref()
                    .is_none_or(|cat| p.categories.iter().any(|c| c == cat))
            })
            .cloned()
            .collect();

        match query.sort {
            ProductSort::TitleAsc => results.sort_by(|a, b| a.title.cmp(&b.title)),
            ProductSort::TitleDesc => results.sort_by(|a, b| b.title.cmp(&a.title)),
        }

        debug!(count = results.len(), "catalog listing");
        Ok(results)
    }
}
