//! Document numbering and payment terms.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::InvoiceError;

/// Kind of numbered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice (`SI`).
    SalesInvoice,
    /// Purchase invoice (`PI`).
    PurchaseInvoice,
    /// Payment voucher (`PMT`).
    Payment,
    /// Receipt voucher (`RCT`).
    Receipt,
}

impl DocumentKind {
    /// Number prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::SalesInvoice => "SI",
            Self::PurchaseInvoice => "PI",
            Self::Payment => "PMT",
            Self::Receipt => "RCT",
        }
    }
}

/// Voucher type of a cash or bank transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoucherType {
    /// Bank payment voucher.
    Bpv,
    /// Cash payment voucher.
    Cpv,
    /// Bank receipt voucher.
    Brv,
    /// Cash receipt voucher.
    Crv,
}

impl VoucherType {
    /// Payment or receipt.
    #[must_use]
    pub const fn kind(self) -> DocumentKind {
        match self {
            Self::Bpv | Self::Cpv => DocumentKind::Payment,
            Self::Brv | Self::Crv => DocumentKind::Receipt,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bpv => "Bank Payment Voucher",
            Self::Cpv => "Cash Payment Voucher",
            Self::Brv => "Bank Receipt Voucher",
            Self::Crv => "Cash Receipt Voucher",
        }
    }
}

/// Returns the number of the next document of a kind.
///
/// `existing` is how many documents of that kind already exist; the sequence
/// part is zero-padded to `width` digits and grows past it if needed.
///
/// ```
/// use ledgerbook_core::invoice::{DocumentKind, next_document_number};
///
/// assert_eq!(next_document_number(DocumentKind::SalesInvoice, 9, 4), "SI-0010");
/// ```
#[must_use]
pub fn next_document_number(kind: DocumentKind, existing: usize, width: usize) -> String {
    format!("{}-{:0width$}", kind.prefix(), existing.saturating_add(1))
}

/// Returns the due date `days` after `invoice_date`.
pub fn due_date(invoice_date: NaiveDate, days: u32) -> Result<NaiveDate, InvoiceError> {
    invoice_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or(InvoiceError::DateOverflow {
            date: invoice_date,
            days,
        })
}
