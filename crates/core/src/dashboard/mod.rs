//! Dashboard rollups.
//!
//! This module provides the data behind the home dashboard:
//! - Trailing month windows
//! - Monthly sales and purchase totals, gap-filled with zeros
//! - Chart series

pub mod aggregator;
pub mod error;
pub mod types;


pub use aggregator::{
    DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS, PeriodAggregator, aggregate, trailing_window,
};
pub use error::DashboardError;
pub use types::{InvoiceRecord, MonthBucket, MonthKey, SalesPurchaseChart};
