//! Catalog collaborator: how warranty rules look products up.

use std::sync::Arc;

use warrantyerp_core::DomainResult;

use crate::product::Product;

/// Lookup/insert access to the product catalog.
///
/// Implemented by infrastructure (in-memory, database, ...). `add` is a setup
/// concern; warranty rules only ever call `find_by_code`.
pub trait ProductCatalog: Send + Sync {
    fn find_by_code(&self, code: &str) -> Option<Product>;

    /// Register a product. Implementations reject a duplicate code with
    /// `DomainError::Conflict`.
    fn add(&self, product: Product) -> DomainResult<()>;
}

impl<C> ProductCatalog for Arc<C>
where
    C: ProductCatalog + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_by_code(code)
    }

    fn add(&self, product: Product) -> DomainResult<()> {
        (**self).add(product)
    }
}

impl<C> ProductCatalog for &C
where
    C: ProductCatalog + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_by_code(code)
    }

    fn add(&self, product: Product) -> DomainResult<()> {
        (**self).add(product)
    }
}
