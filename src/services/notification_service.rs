//! Notification delivery seam.
//!
//! The transfer coordinator announces committed transfers through the
//! [`NotificationSink`] trait. Delivery mechanics (email, push, webhook)
//! live behind the trait; the coordinator only guarantees that events
//! fire after commit and only for successful transfers.

use crate::models::account::Account;

/// Receiver for post-transfer account events.
///
/// Implementations must not block the caller and must not propagate
/// errors: a failed delivery never rolls back the committed transfer.
/// Swallow or log failures inside the sink.
pub trait NotificationSink: Send + Sync {
    /// Deliver `message` to the holder of `account`.
    fn notify(&self, account: &Account, message: &str);
}

/// Sink that emits notifications to the tracing log.
///
/// Stands in for a real delivery channel; useful in development and as
/// the default wiring.
#[derive(Debug, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, account: &Account, message: &str) {
        tracing::info!(account_id = %account.id(), message, "notification dispatched");
    }
}
