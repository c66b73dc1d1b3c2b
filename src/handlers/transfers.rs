//! Transfer HTTP handler.
//!
//! This module implements the transfer endpoint:
//! - POST /api/v1/transfers - Move money between two accounts

use crate::{
    AppState,
    error::LedgerError,
    models::transfer::{TransferReceipt, TransferRequest},
};
use axum::{Json, extract::State};

/// Execute a transfer between two accounts.
///
/// # Endpoint
///
/// `POST /api/v1/transfers`
///
/// # Request Body
///
/// ```json
/// {
///   "from_account_id": "101",
///   "to_account_id": "102",
///   "amount": "200"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: Returns the transfer receipt
/// - **Error (400)**: Amount not positive, or source equals destination
/// - **Error (404)**: Either account id is unknown
/// - **Error (422)**: Source balance is smaller than the amount
///
/// ```json
/// {
///   "from_account_id": "101",
///   "to_account_id": "102",
///   "amount": "200",
///   "from_balance": "800",
///   "to_balance": "700",
///   "completed_at": "2026-08-26T10:00:00Z"
/// }
/// ```
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, LedgerError> {
    let receipt = state.ledger.transfer(
        &request.from_account_id,
        &request.to_account_id,
        request.amount,
    )?;

    Ok(Json(receipt))
}
