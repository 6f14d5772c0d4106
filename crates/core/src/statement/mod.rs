//! General-ledger statements.
//!
//! This module provides the running-balance computation behind the partner
//! ledger report:
//! - Per-entry running balances from an opening balance
//! - Statement totals with the opening balance folded in by sign
//! - Display formatting (parenthesised credit balances, blank zero quantities)

pub mod builder;
pub mod display;
pub mod error;
pub mod types;


pub use builder::LedgerStatementBuilder;
pub use display::{StatementView, format_amount, format_balance, format_quantity, render};
pub use error::{StatementError, StatementField};
pub use types::{
    BalanceSide, LedgerEntry, LedgerRow, LedgerStatement, StatementPeriod, StatementTotals,
};
