//! Application-wide error types.
//!
//! The engine crates return their own module errors. Callers that render
//! results (report views, the dashboard) fold those into [`AppError`] and
//! present the outcome of a fetch-then-compute cycle as an [`Outcome`].

use serde::Serialize;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A numeric field could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream service (the REST backend) failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code used by views and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Severity of the banner a view shows for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Nothing went wrong but there is nothing to show.
    Warning,
    /// The computation or fetch failed.
    Danger,
}

/// Result of a fetch-then-compute cycle, as seen by a view.
///
/// Replaces ad-hoc loading/alert flags with an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Outcome<T> {
    /// Data is ready to render.
    Ready(T),
    /// The request succeeded but returned nothing.
    Empty {
        /// Message for the warning banner.
        message: String,
    },
    /// The request or the computation failed.
    Failed {
        /// Message for the error banner.
        reason: String,
    },
}

impl<T> Outcome<Vec<T>> {
    /// Wraps a collection, turning an empty one into [`Outcome::Empty`].
    pub fn non_empty(items: Vec<T>, message: impl Into<String>) -> Self {
        if items.is_empty() {
            Self::Empty {
                message: message.into(),
            }
        } else {
            Self::Ready(items)
        }
    }
}

impl<T> Outcome<T> {
    /// Returns true if data is ready.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Maps ready data, leaving empty and failed outcomes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ready(data) => Outcome::Ready(f(data)),
            Self::Empty { message } => Outcome::Empty { message },
            Self::Failed { reason } => Outcome::Failed { reason },
        }
    }

    /// Returns the banner a view should show, if any.
    #[must_use]
    pub fn alert(&self) -> Option<(AlertLevel, &str)> {
        match self {
            Self::Ready(_) => None,
            Self::Empty { message } => Some((AlertLevel::Warning, message)),
            Self::Failed { reason } => Some((AlertLevel::Danger, reason)),
        }
    }
}

impl<T> From<AppResult<T>> for Outcome<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed {
                reason: err.to_string(),
            },
        }
    }
}
