//! In-process ledger service.
//!
//! Manages monetary accounts and atomic transfers between them under
//! concurrent access. A transfer locks both account balances in a fixed
//! total order (lexicographic by id), validates, and mutates both as a
//! single atomic unit — many transfers can run concurrently without
//! deadlock, serializing only on shared accounts.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-process DashMap store, one mutex per account balance
//! - **Arithmetic**: rust_decimal (exact decimals, no float drift)
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::services::ledger_service::LedgerService;
use crate::services::notification_service::{LogNotificationSink, NotificationSink};
use crate::store::AccountStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The ledger service owning the account store and notification sink
    pub ledger: Arc<LedgerService>,
}

impl AppState {
    /// State wired with the given notification sink.
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            ledger: Arc::new(LedgerService::new(Arc::new(AccountStore::new()), notifier)),
        }
    }

    /// State wired with the log-only sink (the default for the binary).
    pub fn with_log_sink() -> Self {
        Self::new(Arc::new(LogNotificationSink))
    }
}

/// Build the HTTP router.
///
/// Kept separate from `main` so integration tests can drive the full
/// request path with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public routes
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        // Transfer route
        .route(
            "/api/v1/transfers",
            post(handlers::transfers::create_transfer),
        )
        // Add tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share ledger state with all handlers via State extraction
        .with_state(state)
}
