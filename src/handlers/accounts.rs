//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/:id - Get account by ID
//! - GET /api/v1/accounts - List all accounts

use crate::{
    AppState,
    error::LedgerError,
    models::account::{AccountResponse, CreateAccountRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "101",
///   "initial_balance": "1000"  // optional, defaults to 0
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Empty id or negative opening balance
/// - **Error (409)**: Account id already exists
///
/// ```json
/// {
///   "account_id": "101",
///   "balance": "1000",
///   "created_at": "2026-08-26T10:00:00Z"
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), LedgerError> {
    let account = state
        .ledger
        .create_account(request.account_id, request.initial_balance)?;

    Ok((StatusCode::CREATED, Json(account.as_ref().into())))
}

/// Get a specific account by ID.
///
/// # Endpoint
///
/// `GET /api/v1/accounts/:id`
///
/// # Response
///
/// - **Success (200 OK)**: Returns the account with a balance snapshot
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, LedgerError> {
    let account = state.ledger.get_account(&account_id)?;

    Ok(Json(account.as_ref().into()))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /api/v1/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty)
///
/// Each balance is an independent snapshot; the list is not a single
/// consistent cut across concurrently running transfers.
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, LedgerError> {
    let responses: Vec<AccountResponse> = state
        .ledger
        .list_accounts()
        .iter()
        .map(|account| account.as_ref().into())
        .collect();

    Ok(Json(responses))
}
