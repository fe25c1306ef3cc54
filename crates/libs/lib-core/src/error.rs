//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across all crates. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - caller supplied something unusable
//!    - [`Validation`](AppError::Validation) → 400 Bad Request
//!    - [`UnknownToken`](AppError::UnknownToken) → 400 Bad Request
//!
//! 2. **Server Errors** (5xx) - not the caller's fault
//!    - [`Aggregator`](AppError::Aggregator) → 502 Bad Gateway (Jupiter rejected or failed)
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! Client errors surface their message verbatim. Server errors keep the full
//! diagnostic for the logs and only send a generic message to the caller.
//!
//! ## Wire Format
//!
//! Every error renders as the Actions error envelope:
//!
//! ```json
//! { "error": "Missing user public key" }
//! ```

use crate::dto::ActionError;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request input (account, amount, mint, slippage).
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("{0}")]
    Validation(String),

    /// Mint not present in the curated registry on a restricted route.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("{0}")]
    UnknownToken(String),

    /// Non-success response or transport failure talking to the swap aggregator.
    ///
    /// **HTTP Status**: 502 Bad Gateway
    #[error("Aggregator error: {0}")]
    Aggregator(String),

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::UnknownToken(_) => StatusCode::BAD_REQUEST,
            AppError::Aggregator(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-facing error message.
    ///
    /// Server-side failures return a generic message so upstream bodies and
    /// internal details never reach the caller.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::UnknownToken(msg) => msg.clone(),
            AppError::Aggregator(_) => {
                "Swap failed: the swap route could not be prepared, please try again".to_string()
            }
            AppError::Config(_) | AppError::Internal(_) => {
                "Swap failed: an internal error occurred".to_string()
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full details stay in the server logs
        if self.is_client_error() {
            tracing::debug!("Client error: {}", self);
        } else {
            tracing::error!("Server error: {}", self);
        }

        let body = Json(ActionError {
            error: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `reqwest::Error` to `AppError`.
///
/// Transport failures and undecodable aggregator bodies both count as aggregator errors.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Aggregator(format!("HTTP request failed: {}", err))
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}
