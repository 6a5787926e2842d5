use std::sync::RwLock;

use warrantyerp_core::{DomainError, DomainResult};
use warrantyerp_products::Product;
use warrantyerp_warranty::{Warranty, WarrantyLedger};

/// In-memory warranty ledger for tests/dev.
///
/// Append-only, in issuance order. Lookups by product code return the first
/// matching record. Duplicates are not rejected here; `WarrantyService` never
/// issues a second warranty for the same code.
#[derive(Debug, Default)]
pub struct InMemoryWarrantyLedger {
    inner: RwLock<Vec<Warranty>>,
}

impl InMemoryWarrantyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut warranties) = self.inner.write() {
            warranties.clear();
        }
    }
}

impl WarrantyLedger for InMemoryWarrantyLedger {
    fn find_warrantied_product_by_code(&self, code: &str) -> Option<Product> {
        self.find_by_code(code).map(|w| w.product().clone())
    }

    fn find_by_code(&self, code: &str) -> Option<Warranty> {
        let warranties = self.inner.read().ok()?;
        warranties
            .iter()
            .find(|w| w.product().code().as_str() == code.trim())
            .cloned()
    }

    fn add(&self, warranty: Warranty) -> DomainResult<()> {
        let mut warranties = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("warranty ledger lock poisoned"))?;
        warranties.push(warranty);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn warranty(code: &str, client: &str) -> Warranty {
        let product = Product::new(code, "Teclado Apple", dec!(300000)).unwrap();
        Warranty::new(
            product,
            NaiveDate::from_ymd_opt(2018, 8, 16).unwrap(),
            NaiveDate::from_ymd_opt(2018, 11, 24).unwrap(),
            dec!(30000),
            client,
        )
        .unwrap()
    }

    #[test]
    fn empty_ledger_finds_nothing() {
        let ledger = InMemoryWarrantyLedger::new();
        assert!(ledger.find_by_code("APL-1").is_none());
        assert!(ledger.find_warrantied_product_by_code("APL-1").is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_then_find_by_code() {
        let ledger = InMemoryWarrantyLedger::new();
        let w = warranty("APL-1", "client");
        ledger.add(w.clone()).unwrap();

        assert_eq!(ledger.find_by_code("APL-1"), Some(w.clone()));
        assert_eq!(
            ledger.find_warrantied_product_by_code("APL-1"),
            Some(w.product().clone())
        );
        assert!(ledger.find_by_code("APL-2").is_none());
    }

    #[test]
    fn first_record_wins_on_lookup() {
        let ledger = InMemoryWarrantyLedger::new();
        ledger.add(warranty("APL-1", "first")).unwrap();
        ledger.add(warranty("APL-1", "second")).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.find_by_code("APL-1").unwrap().client_name(), "first");
    }

    #[test]
    fn clear_empties_the_ledger() {
        let ledger = InMemoryWarrantyLedger::new();
        ledger.add(warranty("APL-1", "client")).unwrap();
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.find_by_code("APL-1").is_none());
    }
}
