//! Display formatting for ledger statements.
//!
//! Amounts are shown at two decimal places with no currency symbol or
//! grouping. A credit balance is shown as its absolute value in parentheses.

use chrono::NaiveDate;
use ledgerbook_shared::types::round2;
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::{BalanceSide, LedgerRow, LedgerStatement, StatementPeriod};

/// Description of the synthetic first line of every statement.
pub const OPENING_BALANCE_LABEL: &str = "Opening Balance";

/// Formats an amount at two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round2(amount))
}

/// Formats a signed balance: `120.00` for debit balances, `(30.00)` for
/// credit balances.
#[must_use]
pub fn format_balance(balance: Decimal) -> String {
    match BalanceSide::of(balance) {
        BalanceSide::Debit => format_amount(balance),
        BalanceSide::Credit => format!("({})", format_amount(balance.abs())),
    }
}

/// Formats a quantity cell; the "not applicable" marker renders blank.
#[must_use]
pub fn format_quantity(raw: &str, quantity: Decimal) -> String {
    if raw.trim() == "0" {
        String::new()
    } else {
        quantity.normalize().to_string()
    }
}

fn amount_cell(amount: Decimal) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        format_amount(amount)
    }
}

/// One printable statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    /// Posting date.
    pub date: NaiveDate,
    /// Instrument number.
    pub instrument_no: String,
    /// Reference.
    pub reference: String,
    /// Description.
    pub description: String,
    /// Quantity cell.
    pub quantity: String,
    /// Debit cell.
    pub debit: String,
    /// Credit cell.
    pub credit: String,
    /// Balance cell.
    pub balance: String,
}

/// Printable totals line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementFooter {
    /// Total quantity.
    pub total_quantity: String,
    /// Total debit.
    pub total_debit: String,
    /// Total credit.
    pub total_credit: String,
    /// Closing balance.
    pub closing_balance: String,
}

/// A statement laid out for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementView {
    /// Period the statement covers.
    pub period: StatementPeriod,
    /// Opening line followed by one line per entry.
    pub lines: Vec<StatementLine>,
    /// Totals.
    pub footer: StatementFooter,
}

/// Lays a statement out for printing.
///
/// The opening line is dated at the period start and puts the opening balance
/// in the debit cell when it is non-negative, or its absolute value in the
/// credit cell when it is negative.
#[must_use]
pub fn render(statement: &LedgerStatement, period: StatementPeriod) -> StatementView {
    let opening = statement.opening_balance;
    let (opening_debit, opening_credit) = match BalanceSide::of(opening) {
        BalanceSide::Debit => (format_amount(opening), String::new()),
        BalanceSide::Credit => (String::new(), format_amount(opening.abs())),
    };

    let mut lines = Vec::with_capacity(statement.rows.len() + 1);
    lines.push(StatementLine {
        date: period.start_date,
        instrument_no: String::new(),
        reference: String::new(),
        description: OPENING_BALANCE_LABEL.to_string(),
        quantity: String::new(),
        debit: opening_debit,
        credit: opening_credit,
        balance: format_balance(opening),
    });
    lines.extend(statement.rows.iter().map(row_line));

    let totals = &statement.totals;
    StatementView {
        period,
        lines,
        footer: StatementFooter {
            total_quantity: totals.total_quantity.normalize().to_string(),
            total_debit: format_amount(totals.total_debit),
            total_credit: format_amount(totals.total_credit),
            closing_balance: format_balance(totals.closing_balance),
        },
    }
}

fn row_line(row: &LedgerRow) -> StatementLine {
    StatementLine {
        date: row.entry.date,
        instrument_no: row.entry.instrument_no.clone(),
        reference: row.entry.reference.clone(),
        description: row.entry.description.clone(),
        quantity: format_quantity(&row.entry.quantity, row.quantity),
        debit: amount_cell(row.debit),
        credit: amount_cell(row.credit),
        balance: format_balance(row.balance),
    }
}
