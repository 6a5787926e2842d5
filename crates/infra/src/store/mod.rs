//! In-memory implementations of the catalog and ledger collaborators.

pub mod catalog;
pub mod ledger;

pub use catalog::InMemoryProductCatalog;
pub use ledger::InMemoryWarrantyLedger;
