//! Catalog domain module.
//!
//! This crate contains the product/variant data model consumed by the
//! resolver, plus the repository collaborator that supplies it. The data is
//! read-only from this side: it is owned and mutated by an external content
//! service and fetched fresh per request.

pub mod product;
pub mod rating;
pub mod repository;

pub use product::{Product, ProductStatus, Variant, VariantAxis, VariantOption};
pub use rating::Rating;
pub use repository::{CatalogRepository, InMemoryCatalog, ProductQuery, ProductSort};
