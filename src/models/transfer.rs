//! Transfer request/response types.
//!
//! A transfer is ephemeral — it is never persisted, only executed. These
//! types carry the request into the coordinator and the receipt back out.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for executing a transfer.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": "101",
///   "to_account_id": "102",
///   "amount": "200"
/// }
/// ```
///
/// # Validation
///
/// - `amount`: Required, must be strictly positive
/// - `from_account_id` / `to_account_id`: Required, must be distinct and
///   resolve to existing accounts
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Account the amount is withdrawn from
    pub from_account_id: String,

    /// Account the amount is deposited into
    pub to_account_id: String,

    /// Amount to move (exact decimal)
    pub amount: Decimal,
}

/// Response body for a committed transfer.
///
/// The balances are the post-commit snapshots taken while both account
/// locks were still held, so they are guaranteed consistent with each
/// other (their sum equals the pre-transfer sum).
///
/// # JSON Example
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
#[derive(Debug, Serialize)]
pub struct TransferReceipt {
    /// Source account id
    pub from_account_id: String,

    /// Destination account id
    pub to_account_id: String,

    /// Amount moved
    pub amount: Decimal,

    /// Source balance immediately after commit
    pub from_balance: Decimal,

    /// Destination balance immediately after commit
    pub to_balance: Decimal,

    /// Commit timestamp
    pub completed_at: DateTime<Utc>,
}
