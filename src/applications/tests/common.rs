use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::applications::domain::{CompanyData, Product, SellerApplication};
use crate::applications::partners::{
    ApplicationResult, BusinessLoansService, CompanyDataRequest, ConfidentialInvoiceService,
    LoansRequest, PartnerError, SelectInvoiceService,
};
use crate::applications::service::ProductApplicationService;

pub(super) fn company() -> CompanyData {
    CompanyData {
        name: "Sloth Traders Ltd".to_string(),
        number: 10,
        founded: NaiveDate::from_ymd_opt(2020, 12, 7).expect("valid date"),
        director_name: "Pat Moss".to_string(),
    }
}

pub(super) fn selective_invoice_application() -> SellerApplication {
    SellerApplication {
        company: company(),
        product: Product::SelectiveInvoiceDiscount {
            invoice_amount: dec!(20),
            advance_percentage: dec!(18),
        },
    }
}

pub(super) fn confidential_invoice_application() -> SellerApplication {
    SellerApplication {
        company: company(),
        product: Product::ConfidentialInvoiceDiscount {
            total_ledger_networth: dec!(4),
            advance_percentage: dec!(2.0),
            vat_rate: dec!(18),
        },
    }
}

pub(super) fn business_loan_application() -> SellerApplication {
    SellerApplication {
        company: company(),
        product: Product::BusinessLoan {
            loan_amount: dec!(2000),
            interest_rate_per_annum: dec!(7.5),
        },
    }
}

pub(super) fn unsupported_application() -> SellerApplication {
    SellerApplication {
        company: company(),
        product: Product::Unsupported,
    }
}

/// Select-invoice fake returning a canned code and recording every call.
pub(super) struct RecordingSelectInvoice {
    response: i32,
    calls: Mutex<Vec<(String, Decimal, Decimal)>>,
}

impl RecordingSelectInvoice {
    pub(super) fn returning(response: i32) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<(String, Decimal, Decimal)> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }
}

impl SelectInvoiceService for RecordingSelectInvoice {
    fn submit_application_for(
        &self,
        company_number: &str,
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    ) -> Result<i32, PartnerError> {
        self.calls
            .lock()
            .expect("call log mutex poisoned")
            .push((company_number.to_string(), invoice_amount, advance_percentage));
        Ok(self.response)
    }
}

/// Confidential-invoice fake returning a canned result and recording calls.
pub(super) struct RecordingConfidentialInvoice {
    response: ApplicationResult,
    calls: Mutex<Vec<(CompanyDataRequest, Decimal, Decimal, Decimal)>>,
}

impl RecordingConfidentialInvoice {
    pub(super) fn returning(response: ApplicationResult) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<(CompanyDataRequest, Decimal, Decimal, Decimal)> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }
}

impl ConfidentialInvoiceService for RecordingConfidentialInvoice {
    fn submit_application_for(
        &self,
        company: CompanyDataRequest,
        total_ledger_networth: Decimal,
        advance_percentage: Decimal,
        vat_rate: Decimal,
    ) -> Result<ApplicationResult, PartnerError> {
        self.calls.lock().expect("call log mutex poisoned").push((
            company,
            total_ledger_networth,
            advance_percentage,
            vat_rate,
        ));
        Ok(self.response)
    }
}

/// Business-loans fake returning a canned result and recording calls.
pub(super) struct RecordingBusinessLoans {
    response: ApplicationResult,
    calls: Mutex<Vec<(CompanyDataRequest, LoansRequest)>>,
}

impl RecordingBusinessLoans {
    pub(super) fn returning(response: ApplicationResult) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<(CompanyDataRequest, LoansRequest)> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }
}

impl BusinessLoansService for RecordingBusinessLoans {
    fn submit_application_for(
        &self,
        company: CompanyDataRequest,
        loans: LoansRequest,
    ) -> Result<ApplicationResult, PartnerError> {
        self.calls
            .lock()
            .expect("call log mutex poisoned")
            .push((company, loans));
        Ok(self.response)
    }
}

/// Partner fake that fails at the transport layer for every product.
pub(super) struct OfflinePartner;

impl SelectInvoiceService for OfflinePartner {
    fn submit_application_for(
        &self,
        _company_number: &str,
        _invoice_amount: Decimal,
        _advance_percentage: Decimal,
    ) -> Result<i32, PartnerError> {
        Err(PartnerError::Transport("partner gateway offline".to_string()))
    }
}

impl ConfidentialInvoiceService for OfflinePartner {
    fn submit_application_for(
        &self,
        _company: CompanyDataRequest,
        _total_ledger_networth: Decimal,
        _advance_percentage: Decimal,
        _vat_rate: Decimal,
    ) -> Result<ApplicationResult, PartnerError> {
        Err(PartnerError::Transport("partner gateway offline".to_string()))
    }
}

impl BusinessLoansService for OfflinePartner {
    fn submit_application_for(
        &self,
        _company: CompanyDataRequest,
        _loans: LoansRequest,
    ) -> Result<ApplicationResult, PartnerError> {
        Err(PartnerError::Transport("partner gateway offline".to_string()))
    }
}

pub(super) fn accepted(id: i32) -> ApplicationResult {
    ApplicationResult {
        success: true,
        application_id: Some(id),
    }
}

pub(super) fn rejected() -> ApplicationResult {
    ApplicationResult {
        success: false,
        application_id: None,
    }
}

pub(super) fn accepted_without_reference() -> ApplicationResult {
    ApplicationResult {
        success: true,
        application_id: None,
    }
}

#[allow(clippy::type_complexity)]
pub(super) fn build_service(
    select_invoice: RecordingSelectInvoice,
    confidential_invoice: RecordingConfidentialInvoice,
    business_loans: RecordingBusinessLoans,
) -> (
    ProductApplicationService<
        RecordingSelectInvoice,
        RecordingConfidentialInvoice,
        RecordingBusinessLoans,
    >,
    Arc<RecordingSelectInvoice>,
    Arc<RecordingConfidentialInvoice>,
    Arc<RecordingBusinessLoans>,
) {
    let select_invoice = Arc::new(select_invoice);
    let confidential_invoice = Arc::new(confidential_invoice);
    let business_loans = Arc::new(business_loans);
    let service = ProductApplicationService::new(
        select_invoice.clone(),
        confidential_invoice.clone(),
        business_loans.clone(),
    );
    (service, select_invoice, confidential_invoice, business_loans)
}

pub(super) fn default_service() -> (
    ProductApplicationService<
        RecordingSelectInvoice,
        RecordingConfidentialInvoice,
        RecordingBusinessLoans,
    >,
    Arc<RecordingSelectInvoice>,
    Arc<RecordingConfidentialInvoice>,
    Arc<RecordingBusinessLoans>,
) {
    build_service(
        RecordingSelectInvoice::returning(1),
        RecordingConfidentialInvoice::returning(accepted(2)),
        RecordingBusinessLoans::returning(accepted(2)),
    )
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
