//! Invoice and voucher arithmetic.
//!
//! Pure helpers behind the invoice and transaction forms:
//! - Line valuation (quantity, rate, sales tax, net amount)
//! - Invoice drafts and totals
//! - Document numbering and due dates

pub mod draft;
pub mod error;
pub mod numbering;
pub mod types;

pub use draft::{InvoiceDraft, invoice_total};
pub use error::InvoiceError;
pub use numbering::{DocumentKind, VoucherType, due_date, next_document_number};
pub use types::{Invoice, InvoiceItem, InvoiceType, InvoiceWithPartner, Product};
