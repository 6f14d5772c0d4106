//! Common types used across the engine crates.

pub mod money;

pub use money::{AmountParseError, DEFAULT_SCALE, parse_amount, round_money, round2};
