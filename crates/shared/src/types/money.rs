//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end. Wire payloads may carry
//! amounts either as JSON strings or JSON numbers; both are kept as text until
//! a caller parses them with [`parse_amount`], so a malformed value is reported
//! instead of silently becoming zero.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places money is carried at unless configured otherwise.
pub const DEFAULT_SCALE: u32 = 2;

/// Error returned when amount text is not a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    /// The text was empty or whitespace only.
    #[error("amount is blank")]
    Blank,

    /// The text is not a decimal number.
    #[error("'{0}' is not a decimal number")]
    Invalid(String),
}

/// Parses amount text into a `Decimal`.
///
/// Surrounding whitespace is ignored. Scientific notation (`1.5e3`) is
/// accepted because JSON numbers may be serialized that way. Digit-group
/// underscores and fractions with more digits than a `Decimal` can hold are
/// rejected rather than coerced.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AmountParseError::Blank);
    }
    if text.contains('_') {
        return Err(AmountParseError::Invalid(text.to_string()));
    }

    let parsed = match text.split_once(['e', 'E']) {
        None => Decimal::from_str_exact(text),
        Some((mantissa, _)) => {
            Decimal::from_str_exact(mantissa).and_then(|_| Decimal::from_scientific(text))
        }
    };
    parsed.map_err(|_| AmountParseError::Invalid(text.to_string()))
}

/// Rounds an amount to `scale` decimal places, midpoint away from zero.
///
/// A result that rounds to zero is always positive zero, so `-0.004`
/// becomes `0.00` rather than `-0.00`.
#[must_use]
pub fn round_money(amount: Decimal, scale: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Rounds an amount to two decimal places.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    round_money(amount, DEFAULT_SCALE)
}

/// Serde adapter for amounts that arrive as JSON strings or JSON numbers.
///
/// The value is stored as its textual form. Use with
/// `#[serde(with = "ledgerbook_shared::types::money::amount_text")]`.
pub mod amount_text {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireAmount {
        Text(String),
        Number(serde_json::Number),
    }

    /// Serializes the amount text as a JSON string.
    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes a string or number into amount text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireAmount::deserialize(deserializer)? {
            WireAmount::Text(text) => text,
            WireAmount::Number(number) => number.to_string(),
        })
    }
}
