//! Running-balance computation for ledger statements.

use chrono::NaiveDate;
use ledgerbook_shared::config::StatementConfig;
use ledgerbook_shared::types::{DEFAULT_SCALE, parse_amount, round_money};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use super::error::{StatementError, StatementField};
use super::types::{BalanceSide, LedgerEntry, LedgerRow, LedgerStatement, StatementTotals};
use crate::partner::Partner;

/// Builds balance-annotated ledger statements.
///
/// Each running balance is rounded before it is carried into the next row,
/// so rounding error never compounds. Totals are left unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStatementBuilder {
    decimal_places: u32,
}

impl LedgerStatementBuilder {
    /// Creates a builder that rounds balances to two decimal places.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decimal_places: DEFAULT_SCALE,
        }
    }

    /// Creates a builder that rounds balances to `decimal_places`.
    #[must_use]
    pub const fn with_decimal_places(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    /// Creates a builder from configuration.
    #[must_use]
    pub const fn from_config(config: &StatementConfig) -> Self {
        Self::with_decimal_places(config.decimal_places)
    }

    /// Decimal places running balances are rounded to.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Builds a statement for a partner, starting from its opening balance.
    pub fn build_for_partner(
        &self,
        partner: &Partner,
        entries: &[LedgerEntry],
    ) -> Result<LedgerStatement, StatementError> {
        self.build(&partner.opening_balance, entries)
    }

    /// Builds a statement from opening-balance text and ordered entries.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::Parse`] naming the field when the opening
    /// balance or any entry's debit, credit or quantity is not a number, and
    /// [`StatementError::Overflow`] if a balance or total leaves the `Decimal`
    /// range.
    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    pub fn build(
        &self,
        opening_balance: &str,
        entries: &[LedgerEntry],
    ) -> Result<LedgerStatement, StatementError> {
        let opening = parse_field(StatementField::OpeningBalance, None, opening_balance)?;
        self.build_from_opening(opening, entries)
    }

    /// Builds a statement from an already parsed opening balance.
    ///
    /// Entries are processed in the order given; they are expected to be
    /// sorted ascending by date and are never re-sorted.
    pub fn build_from_opening(
        &self,
        opening_balance: Decimal,
        entries: &[LedgerEntry],
    ) -> Result<LedgerStatement, StatementError> {
        let mut running_balance = opening_balance;
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let mut total_quantity = Decimal::ZERO;
        let mut previous_date: Option<NaiveDate> = None;
        let mut rows = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let debit = parse_field(StatementField::Debit, Some(index), &entry.debit)?;
            let credit = parse_field(StatementField::Credit, Some(index), &entry.credit)?;
            let quantity = parse_field(StatementField::Quantity, Some(index), &entry.quantity)?;

            if previous_date.is_some_and(|previous| entry.date < previous) {
                warn!(
                    entry = index + 1,
                    date = %entry.date,
                    "Ledger entry is dated before its predecessor, keeping input order"
                );
            }
            previous_date = Some(entry.date);

            let overflow = || StatementError::Overflow { row: Some(index) };
            let unrounded = running_balance
                .checked_add(debit)
                .and_then(|sum| sum.checked_sub(credit))
                .ok_or_else(overflow)?;
            let balance = round_money(unrounded, self.decimal_places);

            total_debit = total_debit.checked_add(debit).ok_or_else(overflow)?;
            total_credit = total_credit.checked_add(credit).ok_or_else(overflow)?;
            total_quantity = total_quantity.checked_add(quantity).ok_or_else(overflow)?;
            running_balance = balance;

            rows.push(LedgerRow {
                entry: entry.clone(),
                debit,
                credit,
                quantity,
                balance,
            });
        }

        let folded = match BalanceSide::of(opening_balance) {
            BalanceSide::Debit => total_debit
                .checked_add(opening_balance)
                .map(|debit| (debit, total_credit)),
            BalanceSide::Credit => total_credit
                .checked_add(opening_balance.abs())
                .map(|credit| (total_debit, credit)),
        };
        let (total_debit, total_credit) =
            folded.ok_or(StatementError::Overflow { row: None })?;

        let totals = StatementTotals {
            total_debit,
            total_credit,
            total_quantity,
            closing_balance: running_balance,
        };

        debug!(
            rows = rows.len(),
            closing_balance = %totals.closing_balance,
            "Built ledger statement"
        );

        Ok(LedgerStatement {
            opening_balance,
            rows,
            totals,
        })
    }
}

impl Default for LedgerStatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(
    field: StatementField,
    row: Option<usize>,
    raw: &str,
) -> Result<Decimal, StatementError> {
    parse_amount(raw).map_err(|reason| StatementError::Parse {
        field,
        row,
        value: raw.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn entry(date: &str, debit: &str, credit: &str) -> LedgerEntry {
        LedgerEntry {
            date: date.parse().unwrap(),
            instrument_no: String::new(),
            reference: String::new(),
            description: String::new(),
            quantity: "0".to_string(),
            debit: debit.to_string(),
            credit: credit.to_string(),
        }
    }

    #[test]
    fn test_opening_debit_then_debit_and_credit() {
        let entries = vec![
            entry("2024-01-05", "50", "0"),
            entry("2024-01-09", "0", "30"),
        ];

        let statement = LedgerStatementBuilder::new()
            .build("100.00", &entries)
            .unwrap();

        let balances: Vec<Decimal> = statement.rows.iter().map(|r| r.balance).collect();
        assert_eq!(balances, vec![dec!(150.00), dec!(120.00)]);
        assert_eq!(statement.totals.closing_balance, dec!(120.00));
        assert_eq!(statement.totals.total_debit, dec!(150.00));
        assert_eq!(statement.totals.total_credit, dec!(30.00));
        assert_eq!(statement.totals.total_quantity, Decimal::ZERO);
    }

    #[test]
    fn test_empty_entries_keep_opening_balance() {
        let statement = LedgerStatementBuilder::new().build("75.25", &[]).unwrap();

        assert!(statement.is_empty());
        assert_eq!(statement.totals.closing_balance, dec!(75.25));
        assert_eq!(statement.totals.total_debit, dec!(75.25));
        assert_eq!(statement.totals.total_credit, Decimal::ZERO);
    }

    #[test]
    fn test_negative_opening_balance_folds_into_credit() {
        let entries = vec![entry("2024-02-01", "40", "0")];

        let statement = LedgerStatementBuilder::new().build("-100", &entries).unwrap();

        assert_eq!(statement.rows[0].balance, dec!(-60));
        assert_eq!(statement.totals.total_debit, dec!(40));
        assert_eq!(statement.totals.total_credit, dec!(100));
        assert_eq!(statement.closing_side(), BalanceSide::Credit);
    }

    #[test]
    fn test_both_sides_on_one_row_are_netted() {
        let entries = vec![entry("2024-02-01", "80", "20")];

        let statement = LedgerStatementBuilder::new().build("0", &entries).unwrap();

        assert_eq!(statement.rows[0].balance, dec!(60));
        assert_eq!(statement.totals.total_debit, dec!(80));
        assert_eq!(statement.totals.total_credit, dec!(20));
    }

    #[test]
    fn test_rounding_is_applied_per_row() {
        // 0.004 twice: per-row rounding drops both, end-only rounding keeps 0.01.
        let entries = vec![
            entry("2024-03-01", "0.004", "0"),
            entry("2024-03-02", "0.004", "0"),
        ];

        let statement = LedgerStatementBuilder::new().build("0", &entries).unwrap();

        assert_eq!(statement.rows[0].balance, dec!(0.00));
        assert_eq!(statement.rows[1].balance, dec!(0.00));
        assert_eq!(statement.totals.closing_balance, dec!(0.00));
        // Totals are not rounded.
        assert_eq!(statement.totals.total_debit, dec!(0.008));
    }

    #[test]
    fn test_rounded_zero_balance_is_not_negative() {
        let entries = vec![entry("2024-03-01", "0", "0.004")];

        let statement = LedgerStatementBuilder::new().build("0", &entries).unwrap();

        let balance = statement.rows[0].balance;
        assert!(balance.is_zero());
        assert!(!balance.is_sign_negative());
        assert_eq!(BalanceSide::of(balance), BalanceSide::Debit);
    }

    #[test]
    fn test_custom_decimal_places() {
        let entries = vec![entry("2024-03-01", "10.5", "0")];

        let statement = LedgerStatementBuilder::with_decimal_places(0)
            .build("0", &entries)
            .unwrap();

        assert_eq!(statement.rows[0].balance, dec!(11));
    }

    #[test]
    fn test_quantities_are_summed_with_zero_marker() {
        let mut first = entry("2024-03-01", "100", "0");
        first.quantity = "12".to_string();
        let second = entry("2024-03-02", "0", "100");
        let mut third = entry("2024-03-03", "55", "0");
        third.quantity = "3.5".to_string();

        let statement = LedgerStatementBuilder::new()
            .build("0", &[first, second, third])
            .unwrap();

        assert!(statement.rows[1].entry.quantity_not_applicable());
        assert_eq!(statement.totals.total_quantity, dec!(15.5));
    }

    #[test]
    fn test_out_of_order_entries_are_not_resorted() {
        let entries = vec![
            entry("2024-03-10", "10", "0"),
            entry("2024-03-01", "5", "0"),
        ];

        let statement = LedgerStatementBuilder::new().build("0", &entries).unwrap();

        assert_eq!(statement.rows[0].entry.date.to_string(), "2024-03-10");
        assert_eq!(statement.rows[1].balance, dec!(15));
    }

    #[test]
    fn test_build_for_partner_uses_opening_balance() {
        let partner: Partner =
            serde_json::from_str(r#"{"firstName":"Bilal","openingBalance":"-20"}"#).unwrap();
        let entries = vec![entry("2024-04-01", "20", "0")];

        let statement = LedgerStatementBuilder::new()
            .build_for_partner(&partner, &entries)
            .unwrap();

        assert_eq!(statement.opening_balance, dec!(-20));
        assert_eq!(statement.totals.closing_balance, dec!(0));
    }

    #[test]
    fn test_overflowing_balance_is_an_error() {
        let max = Decimal::MAX.to_string();
        let entries = vec![entry("2024-05-01", &max, "0")];

        let result = LedgerStatementBuilder::new().build(&max, &entries);

        assert!(matches!(
            result,
            Err(StatementError::Overflow { row: Some(0) })
        ));
    }

    #[test]
    fn test_overflowing_totals_are_an_error() {
        let max = Decimal::MAX.to_string();
        let entries = vec![
            entry("2024-05-01", &max, "0"),
            entry("2024-05-02", "0", &max),
            entry("2024-05-03", &max, "0"),
        ];

        let result = LedgerStatementBuilder::new().build("0", &entries);

        assert!(matches!(
            result,
            Err(StatementError::Overflow { row: Some(2) })
        ));
    }

    #[test]
    fn test_overflow_when_folding_opening_balance() {
        let max = Decimal::MAX.to_string();
        let entries = vec![
            entry("2024-05-01", "0", &max),
            entry("2024-05-02", &max, "0"),
        ];

        let result = LedgerStatementBuilder::new().build("1", &entries);

        assert!(matches!(result, Err(StatementError::Overflow { row: None })));
    }

    #[rstest]
    #[case("abc", "0", "0", StatementField::OpeningBalance, None)]
    #[case("0", "ten", "0", StatementField::Debit, Some(0))]
    #[case("0", "0", "", StatementField::Credit, Some(0))]
    fn test_malformed_input_names_field(
        #[case] opening: &str,
        #[case] debit: &str,
        #[case] credit: &str,
        #[case] expected_field: StatementField,
        #[case] expected_row: Option<usize>,
    ) {
        let entries = vec![entry("2024-05-01", debit, credit)];

        let err = LedgerStatementBuilder::new()
            .build(opening, &entries)
            .unwrap_err();

        match err {
            StatementError::Parse { field, row, .. } => {
                assert_eq!(field, expected_field);
                assert_eq!(row, expected_row);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_quantity_in_later_row() {
        let mut bad = entry("2024-05-02", "1", "0");
        bad.quantity = "n/a".to_string();
        let entries = vec![entry("2024-05-01", "1", "0"), bad];

        let err = LedgerStatementBuilder::new()
            .build("0", &entries)
            .unwrap_err();

        assert_eq!(err.to_string(), "Malformed quantity in entry 2: 'n/a'");
    }

    #[test]
    fn test_build_is_repeatable() {
        let entries = vec![
            entry("2024-06-01", "19.99", "0"),
            entry("2024-06-02", "0", "7.333"),
        ];
        let builder = LedgerStatementBuilder::default();

        let first = builder.build("3.10", &entries).unwrap();
        let second = builder.build("3.10", &entries).unwrap();

        assert_eq!(first, second);
    }
}
