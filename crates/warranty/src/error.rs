//! Warranty issuance errors.

use thiserror::Error;

use warrantyerp_core::DomainError;

pub type WarrantyResult<T> = Result<T, WarrantyError>;

/// Why a warranty could not be issued.
///
/// The first three are expected business outcomes and carry fixed,
/// user-facing messages. None of them is retriable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WarrantyError {
    /// The ledger already holds a warranty for this product code.
    #[error("the product already has an extended warranty")]
    AlreadyWarrantied,

    /// The product code fails the vowel-count eligibility rule.
    #[error("this product is not eligible for an extended warranty")]
    NotEligible,

    /// The product code is unknown to the catalog.
    #[error("product not found")]
    NotFound,

    /// Failure reported by a collaborator or by record construction.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
