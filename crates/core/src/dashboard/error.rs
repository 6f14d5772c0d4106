//! Dashboard error types.

use ledgerbook_shared::AppError;
use thiserror::Error;

use super::types::MonthKey;

/// Dashboard-related errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Window length out of range.
    #[error("Window must cover between 1 and {max} months, got {months}")]
    InvalidWindow {
        /// Requested length.
        months: u32,
        /// Largest accepted length.
        max: u32,
    },

    /// A monthly total exceeds the representable range.
    #[error("Invoice totals for {month} overflow")]
    Overflow {
        /// Month whose total overflowed.
        month: MonthKey,
    },
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        Self::Validation(err.to_string())
    }
}
