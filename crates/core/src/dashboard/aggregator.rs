//! Monthly sales/purchase rollups over a trailing window.

use std::collections::HashMap;

use chrono::NaiveDate;
use ledgerbook_shared::config::DashboardConfig;
use tracing::{debug, instrument};

use super::error::DashboardError;
use super::types::{InvoiceRecord, MonthBucket, MonthKey};
use crate::invoice::InvoiceType;

/// Window length used by the dashboard chart.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Longest window the aggregator accepts.
pub const MAX_WINDOW_MONTHS: u32 = 60;

/// Months ending at (and including) the anchor month, most recent first.
#[must_use]
pub fn trailing_window(anchor: NaiveDate, months: u32) -> Vec<MonthKey> {
    std::iter::successors(Some(MonthKey::from_date(anchor)), |key| Some(key.previous()))
        .take(months as usize)
        .collect()
}

/// Rolls invoices into per-month sales and purchase totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodAggregator {
    window_months: u32,
}

impl PeriodAggregator {
    /// Creates an aggregator covering `window_months` months.
    pub const fn new(window_months: u32) -> Result<Self, DashboardError> {
        if window_months == 0 || window_months > MAX_WINDOW_MONTHS {
            return Err(DashboardError::InvalidWindow {
                months: window_months,
                max: MAX_WINDOW_MONTHS,
            });
        }
        Ok(Self { window_months })
    }

    /// Creates an aggregator from configuration.
    pub const fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        Self::new(config.window_months)
    }

    /// Number of months covered.
    #[must_use]
    pub const fn window_months(&self) -> u32 {
        self.window_months
    }

    /// Aggregates invoices into one bucket per window month.
    ///
    /// Buckets are ordered most recent first and every window month is
    /// present, zero-filled when nothing was invoiced. Invoices outside the
    /// window or of an unknown type are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Overflow`] if a monthly total leaves the
    /// `Decimal` range.
    #[instrument(skip(self, invoices), fields(invoices = invoices.len(), window = self.window_months))]
    pub fn aggregate(
        &self,
        invoices: &[InvoiceRecord],
        anchor: NaiveDate,
    ) -> Result<Vec<MonthBucket>, DashboardError> {
        let mut buckets: Vec<MonthBucket> = trailing_window(anchor, self.window_months)
            .into_iter()
            .map(MonthBucket::empty)
            .collect();
        let slots: HashMap<MonthKey, usize> = buckets
            .iter()
            .enumerate()
            .map(|(slot, bucket)| (bucket.month_key, slot))
            .collect();

        let mut skipped = 0usize;
        for invoice in invoices {
            let Some(&slot) = slots.get(&MonthKey::from_date(invoice.invoice_date)) else {
                skipped += 1;
                continue;
            };
            let bucket = &mut buckets[slot];
            let month = bucket.month_key;
            let total = match invoice.invoice_type {
                InvoiceType::Sales => &mut bucket.sales_invoice_total,
                InvoiceType::Purchase => &mut bucket.purchase_invoice_total,
                InvoiceType::Other => {
                    skipped += 1;
                    continue;
                }
            };
            *total = total
                .checked_add(invoice.invoice_total)
                .ok_or(DashboardError::Overflow { month })?;
        }

        debug!(
            buckets = buckets.len(),
            skipped, "Aggregated invoices into monthly buckets"
        );
        Ok(buckets)
    }
}

impl Default for PeriodAggregator {
    fn default() -> Self {
        Self {
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

/// Aggregates invoices over `window_months` months ending at `anchor`.
///
/// # Errors
///
/// Returns [`DashboardError::InvalidWindow`] for a window outside
/// `1..=60` months and [`DashboardError::Overflow`] if a total overflows.
pub fn aggregate(
    invoices: &[InvoiceRecord],
    window_months: u32,
    anchor: NaiveDate,
) -> Result<Vec<MonthBucket>, DashboardError> {
    PeriodAggregator::new(window_months)?.aggregate(invoices, anchor)
}
