use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use warrantyerp_core::{DomainError, DomainResult, Entity, WarrantyId};
use warrantyerp_products::Product;

/// An issued extended warranty. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warranty {
    id: WarrantyId,
    product: Product,
    request_date: NaiveDate,
    end_date: NaiveDate,
    price: Decimal,
    client_name: String,
}

impl Warranty {
    /// Build a warranty record. The coverage window must be non-empty
    /// (`end_date` strictly after `request_date`).
    pub fn new(
        product: Product,
        request_date: NaiveDate,
        end_date: NaiveDate,
        price: Decimal,
        client_name: impl Into<String>,
    ) -> DomainResult<Self> {
        if end_date <= request_date {
            return Err(DomainError::invariant(format!(
                "warranty must end after it is requested ({request_date} >= {end_date})"
            )));
        }

        Ok(Self {
            id: WarrantyId::new(),
            product,
            request_date,
            end_date,
            price,
            client_name: client_name.into(),
        })
    }

    pub fn id_typed(&self) -> WarrantyId {
        self.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn request_date(&self) -> NaiveDate {
        self.request_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl Entity for Warranty {
    type Id = WarrantyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
