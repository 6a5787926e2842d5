//! Products domain module.
//!
//! Business rules for the product catalog, implemented purely as deterministic
//! domain logic (no IO, no storage). Storage lives behind [`ProductCatalog`].

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::{Product, ProductCode};
