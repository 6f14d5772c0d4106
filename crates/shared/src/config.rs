//! Engine configuration management.

use serde::Deserialize;

/// Engine configuration.
///
/// Every section has defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Ledger statement configuration.
    #[serde(default)]
    pub statement: StatementConfig,
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Invoice and voucher configuration.
    #[serde(default)]
    pub invoicing: InvoicingConfig,
}

/// Ledger statement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatementConfig {
    /// Decimal places each running balance is rounded to.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// Number of trailing months the sales/purchase chart covers.
    #[serde(default = "default_window_months")]
    pub window_months: u32,
}

fn default_window_months() -> u32 {
    6
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
        }
    }
}

/// Invoice and voucher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvoicingConfig {
    /// Zero-padded width of the sequence part of document numbers.
    #[serde(default = "default_number_width")]
    pub number_width: usize,
    /// Days between the invoice date and its due date.
    #[serde(default = "default_payment_terms_days")]
    pub payment_terms_days: u32,
}

fn default_number_width() -> usize {
    4
}

fn default_payment_terms_days() -> u32 {
    30
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            number_width: default_number_width(),
            payment_terms_days: default_payment_terms_days(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `LEDGERBOOK__<SECTION>__<KEY>` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
