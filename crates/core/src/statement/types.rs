//! Statement data types.

use chrono::NaiveDate;
use ledgerbook_shared::types::money::amount_text;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::StatementError;

/// One recorded movement against a partner's account, as returned by the
/// backend.
///
/// Numeric fields keep their wire text so malformed values can be reported
/// with the field that carried them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Posting date.
    pub date: NaiveDate,
    /// Cheque, voucher or invoice number.
    #[serde(default)]
    pub instrument_no: String,
    /// Free-form reference.
    #[serde(default)]
    pub reference: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Quantity; the literal `"0"` means not applicable.
    #[serde(with = "amount_text")]
    pub quantity: String,
    /// Debit amount (non-negative).
    #[serde(with = "amount_text")]
    pub debit: String,
    /// Credit amount (non-negative).
    #[serde(with = "amount_text")]
    pub credit: String,
}

impl LedgerEntry {
    /// Returns true if the quantity is the "not applicable" marker.
    #[must_use]
    pub fn quantity_not_applicable(&self) -> bool {
        self.quantity.trim() == "0"
    }
}

/// A ledger entry annotated with its parsed amounts and the running balance
/// after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    /// The source entry.
    pub entry: LedgerEntry,
    /// Parsed debit.
    pub debit: Decimal,
    /// Parsed credit.
    pub credit: Decimal,
    /// Parsed quantity.
    pub quantity: Decimal,
    /// Running balance after this entry, rounded.
    pub balance: Decimal,
}

/// Aggregate totals of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTotals {
    /// Sum of debits, plus the opening balance when it is non-negative.
    pub total_debit: Decimal,
    /// Sum of credits, plus the absolute opening balance when it is negative.
    pub total_credit: Decimal,
    /// Sum of entry quantities (the opening row has none).
    pub total_quantity: Decimal,
    /// Running balance after the last entry.
    pub closing_balance: Decimal,
}

/// A general-ledger statement for one partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatement {
    /// Opening balance the running balance starts from.
    pub opening_balance: Decimal,
    /// Entries in input order with their running balances.
    pub rows: Vec<LedgerRow>,
    /// Totals.
    pub totals: StatementTotals,
}

impl LedgerStatement {
    /// Returns true if the statement has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the side the closing balance sits on.
    #[must_use]
    pub fn closing_side(&self) -> BalanceSide {
        BalanceSide::of(self.totals.closing_balance)
    }
}

/// Side of the ledger a signed balance belongs to.
///
/// Non-negative balances (including negative zero) are debit balances: the
/// partner owes the business. Negative balances are credit balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// Owed to the business.
    Debit,
    /// Owed by the business.
    Credit,
}

impl BalanceSide {
    /// Classifies a signed balance. There is no tolerance band.
    #[must_use]
    pub fn of(balance: Decimal) -> Self {
        if balance >= Decimal::ZERO {
            Self::Debit
        } else {
            Self::Credit
        }
    }
}

/// Date range a statement was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementPeriod {
    /// First day, inclusive.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
}

impl StatementPeriod {
    /// Creates a period, rejecting a start after the end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, StatementError> {
        if start_date > end_date {
            return Err(StatementError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns true if the date falls within the period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
