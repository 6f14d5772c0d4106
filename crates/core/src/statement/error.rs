//! Statement error types.

use std::fmt;

use chrono::NaiveDate;
use ledgerbook_shared::{AppError, types::AmountParseError};
use thiserror::Error;

/// Numeric field of a statement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementField {
    /// The partner's opening balance.
    OpeningBalance,
    /// An entry's debit amount.
    Debit,
    /// An entry's credit amount.
    Credit,
    /// An entry's quantity.
    Quantity,
}

impl fmt::Display for StatementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpeningBalance => "openingBalance",
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Quantity => "quantity",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building a ledger statement.
#[derive(Debug, Error)]
pub enum StatementError {
    /// A numeric field is not a decimal number.
    #[error("Malformed {field}{}: '{value}'", row_suffix(*.row))]
    Parse {
        /// Field that failed to parse.
        field: StatementField,
        /// Zero-based entry index, `None` for the opening balance.
        row: Option<usize>,
        /// The offending text.
        value: String,
        /// Why it failed.
        #[source]
        reason: AmountParseError,
    },

    /// A running balance or total exceeds the representable range.
    #[error("Amount overflow{}", row_suffix(*.row))]
    Overflow {
        /// Zero-based entry index, `None` when folding the opening balance.
        row: Option<usize>,
    },

    /// Invalid statement period.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

fn row_suffix(row: Option<usize>) -> String {
    row.map(|index| format!(" in entry {}", index + 1))
        .unwrap_or_default()
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::Parse { .. } => Self::Parse(err.to_string()),
            StatementError::Overflow { .. } | StatementError::InvalidDateRange { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}
