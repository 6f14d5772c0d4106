//! Shared types, errors, and configuration for Ledgerbook.
//!
//! This crate provides common building blocks used by the engine crates:
//! - Money helpers with decimal precision (rounding, strict parsing)
//! - Application-wide error and outcome types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{AlertLevel, AppError, AppResult, Outcome};
