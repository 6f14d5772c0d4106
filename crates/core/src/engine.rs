//! Configured entry point bundling the statement builder, the dashboard
//! aggregator and invoice settings.

use chrono::NaiveDate;
use ledgerbook_shared::EngineConfig;
use ledgerbook_shared::config::InvoicingConfig;

use crate::dashboard::{DashboardError, InvoiceRecord, MonthBucket, PeriodAggregator};
use crate::invoice::{DocumentKind, InvoiceDraft, InvoiceError, InvoiceType, next_document_number};
use crate::statement::{LedgerStatementBuilder, LedgerEntry, LedgerStatement, StatementError};

/// Financial statement engine.
///
/// An immutable value built once from [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialStatementEngine {
    statements: LedgerStatementBuilder,
    dashboard: PeriodAggregator,
    invoicing: InvoicingConfig,
}

impl FinancialStatementEngine {
    /// Creates an engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidWindow`] if the configured window is
    /// out of range.
    pub fn from_config(config: &EngineConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            statements: LedgerStatementBuilder::from_config(&config.statement),
            dashboard: PeriodAggregator::from_config(&config.dashboard)?,
            invoicing: config.invoicing.clone(),
        })
    }

    /// The statement builder.
    #[must_use]
    pub const fn statements(&self) -> &LedgerStatementBuilder {
        &self.statements
    }

    /// The dashboard aggregator.
    #[must_use]
    pub const fn dashboard(&self) -> &PeriodAggregator {
        &self.dashboard
    }

    /// Builds a ledger statement. See [`LedgerStatementBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::Parse`] on malformed numeric text and
    /// [`StatementError::Overflow`] if a balance or total overflows.
    pub fn statement(
        &self,
        opening_balance: &str,
        entries: &[LedgerEntry],
    ) -> Result<LedgerStatement, StatementError> {
        self.statements.build(opening_balance, entries)
    }

    /// Monthly totals over the configured window ending at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Overflow`] if a monthly total overflows.
    pub fn monthly_totals(
        &self,
        invoices: &[InvoiceRecord],
        anchor: NaiveDate,
    ) -> Result<Vec<MonthBucket>, DashboardError> {
        self.dashboard.aggregate(invoices, anchor)
    }

    /// Number for the next document of `kind`, given how many already exist.
    #[must_use]
    pub fn next_number(&self, kind: DocumentKind, existing: usize) -> String {
        next_document_number(kind, existing, self.invoicing.number_width)
    }

    /// Starts an invoice draft due after the configured payment terms.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::UnsupportedType`] for unknown invoice types
    /// and [`InvoiceError::DateOverflow`] if the due date is unrepresentable.
    pub fn draft_invoice(
        &self,
        invoice_type: InvoiceType,
        partner_id: impl Into<String>,
        invoice_date: NaiveDate,
    ) -> Result<InvoiceDraft, InvoiceError> {
        InvoiceDraft::new(
            invoice_type,
            partner_id,
            invoice_date,
            self.invoicing.payment_terms_days,
        )
    }
}

impl Default for FinancialStatementEngine {
    fn default() -> Self {
        Self {
            statements: LedgerStatementBuilder::new(),
            dashboard: PeriodAggregator::default(),
            invoicing: InvoicingConfig::default(),
        }
    }
}
