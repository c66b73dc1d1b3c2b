//! Error types and HTTP error response handling.
//!
//! This module defines all ledger errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every variant is a local, recoverable condition surfaced synchronously
/// to the caller of the failing operation — none are fatal to the process.
/// Validation errors are raised before any account lock is taken or any
/// balance is mutated, so a failed operation never leaves partial state.
///
/// Notification delivery failures are deliberately absent from this enum:
/// they must never convert a committed transfer into a reported failure.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A withdraw, deposit, or transfer was given a zero or negative amount.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Amount must be positive")]
    InvalidAmount,

    /// A withdrawal or transfer exceeds the available balance.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient funds in account {account}")]
    InsufficientFunds { account: String },

    /// A referenced account id is absent from the store.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account {id} not found")]
    AccountNotFound { id: String },

    /// Account creation collided with an existing id.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Account id {id} already exists")]
    DuplicateAccount { id: String },

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert LedgerError into an HTTP response.
///
/// This implementation allows Axum handlers to return
/// `Result<T, LedgerError>` and have errors automatically converted to
/// proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidAmount` → 400 Bad Request
/// - `InvalidRequest` → 400 Bad Request
/// - `AccountNotFound` → 404 Not Found
/// - `DuplicateAccount` → 409 Conflict
/// - `InsufficientFunds` → 422 Unprocessable Entity
impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            LedgerError::InvalidAmount => {
                (StatusCode::BAD_REQUEST, "invalid_amount", self.to_string())
            }
            LedgerError::InsufficientFunds { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_funds",
                self.to_string(),
            ),
            LedgerError::AccountNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "account_not_found",
                self.to_string(),
            ),
            LedgerError::DuplicateAccount { .. } => (
                StatusCode::CONFLICT,
                "duplicate_account",
                self.to_string(),
            ),
            LedgerError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
