use std::collections::HashMap;
use std::sync::RwLock;

use warrantyerp_core::{DomainError, DomainResult};
use warrantyerp_products::{Product, ProductCatalog, ProductCode};

/// In-memory product catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    inner: RwLock<HashMap<ProductCode, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_by_code(&self, code: &str) -> Option<Product> {
        let key = ProductCode::new(code).ok()?;
        let map = self.inner.read().ok()?;
        map.get(&key).cloned()
    }

    fn add(&self, product: Product) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("product catalog lock poisoned"))?;

        if map.contains_key(product.code()) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.code()
            )));
        }

        map.insert(product.code().clone(), product);
        Ok(())
    }
}
