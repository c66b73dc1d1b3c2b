//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle account resolution, validation, lock ordering, and
//! notification dispatch.

/// Transfer coordinator and account operations
pub mod ledger_service;
/// Post-transfer notification seam
pub mod notification_service;
