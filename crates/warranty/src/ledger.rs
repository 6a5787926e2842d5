//! Ledger collaborator: where issued warranties are recorded.

use std::sync::Arc;

use warrantyerp_core::DomainResult;
use warrantyerp_products::Product;

use crate::warranty::Warranty;

/// Lookup/insert access to issued warranties, keyed by product code.
///
/// The ledger does not enforce one warranty per product; the service does.
pub trait WarrantyLedger: Send + Sync {
    /// The warrantied product for `code`, if a warranty was issued for it.
    fn find_warrantied_product_by_code(&self, code: &str) -> Option<Product>;

    fn find_by_code(&self, code: &str) -> Option<Warranty>;

    fn add(&self, warranty: Warranty) -> DomainResult<()>;
}

impl<L> WarrantyLedger for Arc<L>
where
    L: WarrantyLedger + ?Sized,
{
    fn find_warrantied_product_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_warrantied_product_by_code(code)
    }

    fn find_by_code(&self, code: &str) -> Option<Warranty> {
        (**self).find_by_code(code)
    }

    fn add(&self, warranty: Warranty) -> DomainResult<()> {
        (**self).add(warranty)
    }
}

impl<L> WarrantyLedger for &L
where
    L: WarrantyLedger + ?Sized,
{
    fn find_warrantied_product_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_warrantied_product_by_code(code)
    }

    fn find_by_code(&self, code: &str) -> Option<Warranty> {
        (**self).find_by_code(code)
    }

    fn add(&self, warranty: Warranty) -> DomainResult<()> {
        (**self).add(warranty)
    }
}
