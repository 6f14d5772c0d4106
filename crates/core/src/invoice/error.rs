//! Invoice error types.

use chrono::NaiveDate;
use ledgerbook_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while preparing an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Line quantity must be positive.
    #[error("Quantity must be greater than zero, got {0}")]
    InvalidQuantity(Decimal),

    /// Product is not active.
    #[error("Product {0} is inactive")]
    ProductInactive(String),

    /// Invoice has no lines.
    #[error("Invoice must have at least one item")]
    NoItems,

    /// Invoice type cannot be numbered or raised.
    #[error("Unsupported invoice type")]
    UnsupportedType,

    /// A line value or the invoice total exceeds the representable range.
    #[error("Amount overflow while valuing {0}")]
    Overflow(String),

    /// Due date falls outside the supported calendar.
    #[error("Cannot add {days} days to {date}")]
    DateOverflow {
        /// Invoice date.
        date: NaiveDate,
        /// Payment terms in days.
        days: u32,
    },
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        Self::Validation(err.to_string())
    }
}
