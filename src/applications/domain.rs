use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller identity attached to every application. Supplied by the caller and
/// read-only to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    pub number: u32,
    pub founded: NaiveDate,
    pub director_name: String,
}

/// The financial products a seller can apply for.
///
/// Unknown product tags arriving over the wire deserialize into
/// [`Product::Unsupported`] so the dispatcher, not the deserializer, rejects
/// them with its fixed diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    SelectiveInvoiceDiscount {
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    },
    ConfidentialInvoiceDiscount {
        total_ledger_networth: Decimal,
        advance_percentage: Decimal,
        vat_rate: Decimal,
    },
    BusinessLoan {
        loan_amount: Decimal,
        interest_rate_per_annum: Decimal,
    },
    #[serde(other)]
    Unsupported,
}

impl Product {
    pub const fn label(&self) -> &'static str {
        match self {
            Product::SelectiveInvoiceDiscount { .. } => "selective_invoice_discount",
            Product::ConfidentialInvoiceDiscount { .. } => "confidential_invoice_discount",
            Product::BusinessLoan { .. } => "business_loan",
            Product::Unsupported => "unsupported",
        }
    }
}

/// One company paired with one product selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerApplication {
    pub company: CompanyData,
    pub product: Product,
}
