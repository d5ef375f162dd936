use std::sync::atomic::{AtomicI32, Ordering};

use rust_decimal::Decimal;

use super::partners::{
    ApplicationResult, BusinessLoansService, CompanyDataRequest, ConfidentialInvoiceService,
    LoansRequest, PartnerError, SelectInvoiceService,
};

/// Deterministic in-process stand-in for all three funding partners, used by
/// the server and the demo CLI so the gateway runs end-to-end without live
/// integrations.
///
/// Accepted applications draw references from one shared sequence; declined
/// ones follow each partner's own contract (a `-1` code for select-invoice,
/// an unsuccessful [`ApplicationResult`] for the other two).
#[derive(Debug, Default)]
pub struct SandboxPartners {
    sequence: AtomicI32,
}

impl SandboxPartners {
    pub fn new() -> Self {
        Self {
            sequence: AtomicI32::new(0),
        }
    }

    fn next_reference(&self) -> i32 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl SelectInvoiceService for SandboxPartners {
    fn submit_application_for(
        &self,
        _company_number: &str,
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    ) -> Result<i32, PartnerError> {
        let fundable = invoice_amount > Decimal::ZERO
            && advance_percentage > Decimal::ZERO
            && advance_percentage <= Decimal::ONE_HUNDRED;
        if fundable {
            Ok(self.next_reference())
        } else {
            Ok(-1)
        }
    }
}

impl ConfidentialInvoiceService for SandboxPartners {
    fn submit_application_for(
        &self,
        _company: CompanyDataRequest,
        total_ledger_networth: Decimal,
        _advance_percentage: Decimal,
        _vat_rate: Decimal,
    ) -> Result<ApplicationResult, PartnerError> {
        if total_ledger_networth > Decimal::ZERO {
            Ok(ApplicationResult {
                success: true,
                application_id: Some(self.next_reference()),
            })
        } else {
            Ok(ApplicationResult {
                success: false,
                application_id: None,
            })
        }
    }
}

impl BusinessLoansService for SandboxPartners {
    fn submit_application_for(
        &self,
        _company: CompanyDataRequest,
        loans: LoansRequest,
    ) -> Result<ApplicationResult, PartnerError> {
        if loans.loan_amount > Decimal::ZERO {
            Ok(ApplicationResult {
                success: true,
                application_id: Some(self.next_reference()),
            })
        } else {
            Ok(ApplicationResult {
                success: false,
                application_id: None,
            })
        }
    }
}
