//! Core business logic for Ledgerbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculations, and formatting rules live here.
//!
//! # Modules
//!
//! - `statement` - Partner ledger statements with running balances
//! - `dashboard` - Trailing-window monthly sales/purchase totals
//! - `invoice` - Invoice line valuation, totals, and document numbering
//! - `partner` - Customers and vendors
//! - `engine` - Configured entry point over the above

pub mod dashboard;
pub mod engine;
pub mod invoice;
pub mod partner;
pub mod statement;

pub use dashboard::PeriodAggregator;
pub use engine::FinancialStatementEngine;
pub use statement::LedgerStatementBuilder;
