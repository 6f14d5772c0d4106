//! Dashboard data types.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::{Invoice, InvoiceType};

/// A calendar month.
///
/// Ordering is chronological (year first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    /// Year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Creates a month key, or `None` if `month` is not 1-12.
    #[must_use]
    pub const fn new(month: u32, year: i32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one, rolling into December of the previous year.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// The slice of an invoice the dashboard aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Sales, purchase, or anything else (ignored).
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    /// Invoice date.
    pub invoice_date: NaiveDate,
    /// Invoice total.
    pub invoice_total: Decimal,
}

impl From<&Invoice> for InvoiceRecord {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_type: invoice.invoice_type,
            invoice_date: invoice.invoice_date,
            invoice_total: invoice.invoice_total,
        }
    }
}

/// Sales and purchase totals for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    /// The month.
    pub month_key: MonthKey,
    /// Sum of sales invoice totals.
    pub sales_invoice_total: Decimal,
    /// Sum of purchase invoice totals.
    pub purchase_invoice_total: Decimal,
}

impl MonthBucket {
    /// A bucket with both totals at zero.
    #[must_use]
    pub const fn empty(month_key: MonthKey) -> Self {
        Self {
            month_key,
            sales_invoice_total: Decimal::ZERO,
            purchase_invoice_total: Decimal::ZERO,
        }
    }

    /// Returns true if no invoice landed in this month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sales_invoice_total.is_zero() && self.purchase_invoice_total.is_zero()
    }
}

/// Sales vs purchases chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPurchaseChart {
    /// Labels (month names such as `3/2024`).
    pub labels: Vec<String>,
    /// Sales totals.
    pub sales: Vec<Decimal>,
    /// Purchase totals.
    pub purchases: Vec<Decimal>,
}

impl SalesPurchaseChart {
    /// Builds chart series in bucket order.
    #[must_use]
    pub fn from_buckets(buckets: &[MonthBucket]) -> Self {
        Self {
            labels: buckets.iter().map(|b| b.month_key.to_string()).collect(),
            sales: buckets.iter().map(|b| b.sales_invoice_total).collect(),
            purchases: buckets.iter().map(|b| b.purchase_invoice_total).collect(),
        }
    }
}
