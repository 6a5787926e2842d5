//! Warranty issuance service.
//!
//! Issuance runs the rules in a fixed order:
//!
//! ```text
//! already warrantied?  -> AlreadyWarrantied
//!   ↓
//! eligible code?       -> NotEligible
//!   ↓
//! product in catalog?  -> NotFound
//!   ↓
//! price + duration (same threshold)
//!   ↓
//! end date (Monday/Sunday walk for premium coverage)
//!   ↓
//! one insert into the ledger
//! ```
//!
//! The service holds no state of its own besides the policy and does not lock
//! the collaborators; callers serialize access if they share them.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use warrantyerp_core::DomainResult;
use warrantyerp_products::ProductCatalog;

use crate::error::{WarrantyError, WarrantyResult};
use crate::ledger::WarrantyLedger;
use crate::policy::WarrantyPolicy;
use crate::rules;
use crate::warranty::Warranty;

pub struct WarrantyService<C, L> {
    catalog: C,
    ledger: L,
    policy: WarrantyPolicy,
}

impl<C, L> WarrantyService<C, L>
where
    C: ProductCatalog,
    L: WarrantyLedger,
{
    /// Service with the default policy.
    pub fn new(catalog: C, ledger: L) -> Self {
        Self::with_policy(catalog, ledger, WarrantyPolicy::default())
    }

    /// Service with an explicit policy. The policy is expected to be validated
    /// already (see `WarrantyPolicy::validate`).
    pub fn with_policy(catalog: C, ledger: L, policy: WarrantyPolicy) -> Self {
        Self {
            catalog,
            ledger,
            policy,
        }
    }

    pub fn policy(&self) -> &WarrantyPolicy {
        &self.policy
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Issue a warranty requested today (local calendar date).
    pub fn issue_warranty(&self, code: &str, client_name: &str) -> WarrantyResult<Warranty> {
        self.issue_warranty_on(code, client_name, Local::now().date_naive())
    }

    /// Issue a warranty requested on `request_date`.
    ///
    /// On success exactly one warranty is added to the ledger and returned.
    /// On failure the ledger is untouched.
    #[instrument(skip(self, client_name))]
    pub fn issue_warranty_on(
        &self,
        code: &str,
        client_name: &str,
        request_date: NaiveDate,
    ) -> WarrantyResult<Warranty> {
        if self.has_warranty(code) {
            debug!("rejected: product already warrantied");
            return Err(WarrantyError::AlreadyWarrantied);
        }

        if !self.allows_warranty(code) {
            debug!("rejected: code not eligible");
            return Err(WarrantyError::NotEligible);
        }

        let product = self
            .catalog
            .find_by_code(code)
            .ok_or(WarrantyError::NotFound)?;

        let price = self.warranty_price(product.price());
        let duration = self.warranty_duration(product.price());
        let end_date = self.warranty_end_date(request_date, duration)?;

        let warranty = Warranty::new(product, request_date, end_date, price, client_name)?;
        self.ledger.add(warranty.clone())?;

        info!(
            warranty_id = %warranty.id_typed(),
            %price,
            duration,
            %request_date,
            %end_date,
            "extended warranty issued"
        );

        Ok(warranty)
    }

    /// True iff the ledger holds a warranty for `code`.
    pub fn has_warranty(&self, code: &str) -> bool {
        self.ledger.find_warrantied_product_by_code(code).is_some()
    }

    pub fn allows_warranty(&self, code: &str) -> bool {
        rules::allows_warranty(code, &self.policy)
    }

    pub fn warranty_price(&self, price: Decimal) -> Decimal {
        rules::warranty_price(price, &self.policy)
    }

    pub fn warranty_duration(&self, price: Decimal) -> u32 {
        rules::warranty_duration(price, &self.policy)
    }

    pub fn warranty_end_date(
        &self,
        request_date: NaiveDate,
        duration_days: u32,
    ) -> DomainResult<NaiveDate> {
        rules::warranty_end_date(request_date, duration_days, &self.policy)
    }
}
