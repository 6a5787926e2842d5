//! Extended-warranty domain module.
//!
//! Eligibility, pricing and coverage-window rules for extended warranties, and
//! the service that issues them against a [`ProductCatalog`] and a
//! [`WarrantyLedger`]. No IO: both stores are injected collaborators.
//!
//! [`ProductCatalog`]: warrantyerp_products::ProductCatalog

pub mod error;
pub mod ledger;
pub mod policy;
pub mod rules;
pub mod service;
pub mod warranty;

pub use error::{WarrantyError, WarrantyResult};
pub use ledger::WarrantyLedger;
pub use policy::WarrantyPolicy;
pub use service::WarrantyService;
pub use warranty::Warranty;
