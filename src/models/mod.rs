//! Data models representing ledger entities.

/// Account entity and its lock-guarded balance
pub mod account;
/// Transfer request/receipt types
pub mod transfer;
