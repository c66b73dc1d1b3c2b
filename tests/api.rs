//! End-to-end tests driving the HTTP router without a live server.
//!
//! Each request goes through the full axum stack (routing, extractors,
//! error-to-response conversion) via `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ledger_service::{AppState, app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::with_log_sink())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_account(router: &Router, id: &str, balance: &str) {
    let (status, _) = send(
        router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "account_id": id, "initial_balance": balance })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_and_fetch_account() {
    let router = test_app();

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "account_id": "101", "initial_balance": "1000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["account_id"], "101");
    assert_eq!(body["balance"], "1000");

    let (status, body) = send(&router, "GET", "/api/v1/accounts/101", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "1000");
}

#[tokio::test]
async fn create_account_defaults_to_zero_balance() {
    let router = test_app();

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "account_id": "empty" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["balance"], "0");
}

#[tokio::test]
async fn duplicate_account_returns_conflict() {
    let router = test_app();
    create_account(&router, "101", "1000").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "account_id": "101", "initial_balance": "500" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "duplicate_account");

    // The original record is untouched.
    let (_, body) = send(&router, "GET", "/api/v1/accounts/101", None).await;
    assert_eq!(body["balance"], "1000");
}

#[tokio::test]
async fn unknown_account_returns_not_found() {
    let router = test_app();

    let (status, body) = send(&router, "GET", "/api/v1/accounts/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "account_not_found");
}

#[tokio::test]
async fn transfer_moves_funds_between_accounts() {
    let router = test_app();
    create_account(&router, "101", "1000").await;
    create_account(&router, "102", "500").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": "101",
            "to_account_id": "102",
            "amount": "200"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from_balance"], "800");
    assert_eq!(body["to_balance"], "700");

    let (_, from) = send(&router, "GET", "/api/v1/accounts/101", None).await;
    let (_, to) = send(&router, "GET", "/api/v1/accounts/102", None).await;
    assert_eq!(from["balance"], "800");
    assert_eq!(to["balance"], "700");
}

#[tokio::test]
async fn transfer_with_insufficient_funds_returns_422_and_changes_nothing() {
    let router = test_app();
    create_account(&router, "101", "800").await;
    create_account(&router, "102", "700").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": "101",
            "to_account_id": "102",
            "amount": "2000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "insufficient_funds");

    let (_, from) = send(&router, "GET", "/api/v1/accounts/101", None).await;
    let (_, to) = send(&router, "GET", "/api/v1/accounts/102", None).await;
    assert_eq!(from["balance"], "800");
    assert_eq!(to["balance"], "700");
}

#[tokio::test]
async fn transfer_with_non_positive_amount_returns_400() {
    let router = test_app();
    create_account(&router, "101", "1000").await;
    create_account(&router, "102", "500").await;

    for amount in ["0", "-100"] {
        let (status, body) = send(
            &router,
            "POST",
            "/api/v1/transfers",
            Some(json!({
                "from_account_id": "101",
                "to_account_id": "102",
                "amount": amount
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_amount");
    }
}

#[tokio::test]
async fn transfer_to_unknown_account_returns_404() {
    let router = test_app();
    create_account(&router, "101", "1000").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": "101",
            "to_account_id": "103",
            "amount": "100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "account_not_found");
}

#[tokio::test]
async fn self_transfer_returns_400() {
    let router = test_app();
    create_account(&router, "101", "1000").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": "101",
            "to_account_id": "101",
            "amount": "100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn list_accounts_returns_all() {
    let router = test_app();
    create_account(&router, "101", "1000").await;
    create_account(&router, "102", "500").await;

    let (status, body) = send(&router, "GET", "/api/v1/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["account_id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["101", "102"]);
}

#[tokio::test]
async fn health_reports_account_count() {
    let router = test_app();
    create_account(&router, "101", "1000").await;

    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["accounts"], 1);
}
