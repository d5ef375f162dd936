//! Seller financing application intake and partner dispatch.
//!
//! A [`SellerApplication`] selects exactly one financial product; the
//! dispatcher translates it into the partner contract for that product,
//! invokes the partner, and reduces the response to a single outcome code.

pub mod domain;
pub mod partners;
pub mod router;
pub mod sandbox;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CompanyData, Product, SellerApplication};
pub use partners::{
    ApplicationResult, BusinessLoansService, CompanyDataRequest, ConfidentialInvoiceService,
    LoansRequest, PartnerError, SelectInvoiceService,
};
pub use router::application_router;
pub use sandbox::SandboxPartners;
pub use service::{ApplicationServiceError, ProductApplicationService, DECLINED};
