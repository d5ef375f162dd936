use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::CompanyData;

/// Company payload consumed by the confidential-invoice and business-loans
/// partners. Built fresh for each call and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDataRequest {
    pub company_founded: NaiveDate,
    pub company_number: u32,
    pub company_name: String,
    pub director_name: String,
}

impl From<&CompanyData> for CompanyDataRequest {
    fn from(data: &CompanyData) -> Self {
        Self {
            company_founded: data.founded,
            company_number: data.number,
            company_name: data.name.clone(),
            director_name: data.director_name.clone(),
        }
    }
}

/// Loan terms forwarded to the business-loans partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoansRequest {
    pub loan_amount: Decimal,
    pub interest_rate_per_annum: Decimal,
}

/// Response shape shared by the two partners that report a success flag and
/// an optional application reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub success: bool,
    pub application_id: Option<i32>,
}

/// Transport-level partner fault. The dispatcher never inspects these; they
/// flow through to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum PartnerError {
    #[error("partner transport unavailable: {0}")]
    Transport(String),
}

/// Selective invoice discounting partner.
///
/// Returns its own integer outcome code verbatim. The sign convention of that
/// code, including whichever negative value it uses to signal failure, belongs
/// to the partner and is not bound by the gateway's declined sentinel.
pub trait SelectInvoiceService: Send + Sync {
    fn submit_application_for(
        &self,
        company_number: &str,
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    ) -> Result<i32, PartnerError>;
}

/// Confidential invoice discounting partner.
pub trait ConfidentialInvoiceService: Send + Sync {
    fn submit_application_for(
        &self,
        company: CompanyDataRequest,
        total_ledger_networth: Decimal,
        advance_percentage: Decimal,
        vat_rate: Decimal,
    ) -> Result<ApplicationResult, PartnerError>;
}

/// Business loans partner.
pub trait BusinessLoansService: Send + Sync {
    fn submit_application_for(
        &self,
        company: CompanyDataRequest,
        loans: LoansRequest,
    ) -> Result<ApplicationResult, PartnerError>;
}
