//! In-memory persistence system: one catalog and one ledger, shared by handle.

use std::sync::Arc;

use warrantyerp_warranty::{WarrantyPolicy, WarrantyService};

use crate::store::{InMemoryProductCatalog, InMemoryWarrantyLedger};

/// Service type wired to the in-memory stores.
pub type InMemoryWarrantyService =
    WarrantyService<Arc<InMemoryProductCatalog>, Arc<InMemoryWarrantyLedger>>;

/// Owns the in-memory stores and hands out shared handles to them.
///
/// Every service built from the same system sees the same catalog and ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    catalog: Arc<InMemoryProductCatalog>,
    ledger: Arc<InMemoryWarrantyLedger>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Arc<InMemoryProductCatalog> {
        self.catalog.clone()
    }

    pub fn ledger(&self) -> Arc<InMemoryWarrantyLedger> {
        self.ledger.clone()
    }

    pub fn warranty_service(&self) -> InMemoryWarrantyService {
        WarrantyService::new(self.catalog(), self.ledger())
    }

    pub fn warranty_service_with_policy(&self, policy: WarrantyPolicy) -> InMemoryWarrantyService {
        WarrantyService::with_policy(self.catalog(), self.ledger(), policy)
    }

    /// Drop every product and warranty.
    pub fn clear(&self) {
        self.ledger.clear();
        self.catalog.clear();
        tracing::debug!("in-memory persistence cleared");
    }
}
