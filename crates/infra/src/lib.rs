//! Infrastructure layer: in-memory stores, persistence wiring, configuration.

pub mod config;
pub mod persistence;
pub mod store;


pub use config::PolicyConfig;
pub use persistence::{InMemoryPersistence, InMemoryWarrantyService};
pub use store::{InMemoryProductCatalog, InMemoryWarrantyLedger};
