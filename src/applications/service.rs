use std::sync::Arc;

use super::domain::{Product, SellerApplication};
use super::partners::{
    ApplicationResult, BusinessLoansService, CompanyDataRequest, ConfidentialInvoiceService,
    LoansRequest, PartnerError, SelectInvoiceService,
};

/// Outcome code for every normalized non-success: a rejected application or a
/// placement that came back without a reference.
pub const DECLINED: i32 = -1;

/// Routes one application to the partner owning its product and reduces the
/// partner response to a single outcome code.
pub struct ProductApplicationService<S, C, B> {
    select_invoice: Arc<S>,
    confidential_invoice: Arc<C>,
    business_loans: Arc<B>,
}

impl<S, C, B> ProductApplicationService<S, C, B>
where
    S: SelectInvoiceService + 'static,
    C: ConfidentialInvoiceService + 'static,
    B: BusinessLoansService + 'static,
{
    pub fn new(select_invoice: Arc<S>, confidential_invoice: Arc<C>, business_loans: Arc<B>) -> Self {
        Self {
            select_invoice,
            confidential_invoice,
            business_loans,
        }
    }

    /// Submit an application to the partner matching its product selection.
    ///
    /// The select-invoice path returns the partner's code verbatim; the other
    /// two paths run through [`outcome_code`]. An application carrying an
    /// unsupported product never reaches a partner.
    pub fn submit_application_for(
        &self,
        application: &SellerApplication,
    ) -> Result<i32, ApplicationServiceError> {
        match &application.product {
            Product::SelectiveInvoiceDiscount {
                invoice_amount,
                advance_percentage,
            } => {
                let code = self.select_invoice.submit_application_for(
                    &application.company.number.to_string(),
                    *invoice_amount,
                    *advance_percentage,
                )?;
                Ok(code)
            }
            Product::ConfidentialInvoiceDiscount {
                total_ledger_networth,
                advance_percentage,
                vat_rate,
            } => {
                let result = self.confidential_invoice.submit_application_for(
                    CompanyDataRequest::from(&application.company),
                    *total_ledger_networth,
                    *advance_percentage,
                    *vat_rate,
                )?;
                Ok(outcome_code(result))
            }
            Product::BusinessLoan {
                loan_amount,
                interest_rate_per_annum,
            } => {
                let result = self.business_loans.submit_application_for(
                    CompanyDataRequest::from(&application.company),
                    LoansRequest {
                        loan_amount: *loan_amount,
                        interest_rate_per_annum: *interest_rate_per_annum,
                    },
                )?;
                Ok(outcome_code(result))
            }
            Product::Unsupported => Err(ApplicationServiceError::UnsupportedProduct),
        }
    }
}

/// Reduce a partner result to the outcome-code contract: a placement without
/// a reference is not a placement.
pub(crate) fn outcome_code(result: ApplicationResult) -> i32 {
    match result {
        ApplicationResult {
            success: true,
            application_id: Some(id),
        } => id,
        _ => DECLINED,
    }
}

/// Error raised by the dispatch service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("no partner integration accepts this product type")]
    UnsupportedProduct,
    #[error(transparent)]
    Partner(#[from] PartnerError),
}
