//! End-to-end tests for the request workflow.
//!
//! Tests cover:
//! - Division-side submission with every pre-check blocking before the wire
//! - Admin approval decrementing stock and producing an outgoing record
//! - Rejection requiring a note; cancelled confirmations making no call
//! - Terminal requests being immutable client-side
//! - The server's conflict answer surfacing as a plain API error

mod common;

use common::TestApp;

use atk_client::errors::ClientError;
use atk_client::models::RequestStatus;
use atk_client::services::{Confirmation, Decision, Outcome, RequestForm};

fn form(item_id: Option<i64>, quantity: i64, reason: &str) -> RequestForm {
    RequestForm {
        item_id,
        quantity,
        reason: reason.to_string(),
    }
}

#[tokio::test]
async fn submission_happy_path_creates_pending_request() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs"));

    let items = client.services.items.list().await.expect("items");
    let created = client
        .services
        .requests
        .submit(&form(Some(1), 5, "Kebutuhan rapat"), &items)
        .await
        .expect("submit");

    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(created.item_id, 1);
    assert_eq!(created.quantity, 5);
    assert_eq!(app.with_state(|s| s.hits("POST /api/PermintaanBarang")), 1);

    // The status list shows it after a re-fetch.
    let listed = client.services.requests.list().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_pending());
}

#[tokio::test]
async fn blocked_submissions_make_zero_network_calls() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| s.seed_item(1, "BRG001", "Pulpen", 3, "Pcs"));
    let items = client.services.items.list().await.expect("items");

    // No item selected.
    let err = client
        .services
        .requests
        .submit(&form(None, 5, "alasan"), &items)
        .await
        .expect_err("no item");
    assert!(err.is_validation());

    // Non-positive quantity.
    let err = client
        .services
        .requests
        .submit(&form(Some(1), 0, "alasan"), &items)
        .await
        .expect_err("zero quantity");
    assert!(err.is_validation());

    // Blank reason.
    let err = client
        .services
        .requests
        .submit(&form(Some(1), 2, "   "), &items)
        .await
        .expect_err("blank reason");
    assert!(err.is_validation());

    // Quantity over displayed stock (5 > 3).
    let err = client
        .services
        .requests
        .submit(&form(Some(1), 5, "alasan"), &items)
        .await
        .expect_err("over stock");
    assert!(matches!(err, ClientError::InsufficientStock(_)));
    assert!(err.to_string().contains("stock not sufficient"));

    assert_eq!(app.with_state(|s| s.hits("POST /api/PermintaanBarang")), 0);
}

#[tokio::test]
async fn approval_at_exact_stock_refetches_and_decrements() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 10, "Pcs");
        s.seed_request(100, 1, 10, 0);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");
    let request = &requests[0];

    let outcome = client
        .services
        .requests
        .decide(
            request,
            items.iter().find(|i| i.id == request.item_id),
            Decision::Approve,
            "",
            Confirmation::Confirmed,
        )
        .await
        .expect("approve");

    let Outcome::Applied(refreshed) = outcome else {
        panic!("approval should apply");
    };
    assert_eq!(refreshed[0].status, RequestStatus::Approved);
    assert_eq!(
        refreshed[0].admin_note.as_deref(),
        Some(atk_client::services::requests::DEFAULT_APPROVE_NOTE)
    );

    // Server-side effects: stock decremented, outgoing record produced.
    assert_eq!(app.with_state(|s| s.item_stock(1)), Some(0));
    let outgoing = client
        .services
        .outgoing_stock
        .list()
        .await
        .expect("outgoing");
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].request_id, Some(100));
    assert_eq!(outgoing[0].quantity, 10);
}

#[tokio::test]
async fn approval_blocked_when_displayed_stock_is_short() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 4, "Pcs");
        s.seed_request(100, 1, 5, 0);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");

    let err = client
        .services
        .requests
        .decide(
            &requests[0],
            items.first(),
            Decision::Approve,
            "",
            Confirmation::Confirmed,
        )
        .await
        .expect_err("insufficient stock");

    assert!(matches!(err, ClientError::InsufficientStock(_)));
    assert_eq!(
        app.with_state(|s| s.hits("PUT /api/PermintaanBarang/{id}/status")),
        0
    );
    assert_eq!(app.with_state(|s| s.request_status(100)), Some(0));
}

#[tokio::test]
async fn rejection_requires_note_and_keeps_request_pending() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs");
        s.seed_request(100, 1, 5, 0);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");

    let err = client
        .services
        .requests
        .decide(
            &requests[0],
            items.first(),
            Decision::Reject,
            "  ",
            Confirmation::Confirmed,
        )
        .await
        .expect_err("empty note");

    assert_eq!(
        err.to_string(),
        "Validation error: a note is required when rejecting"
    );
    assert_eq!(
        app.with_state(|s| s.hits("PUT /api/PermintaanBarang/{id}/status")),
        0
    );
    assert_eq!(app.with_state(|s| s.request_status(100)), Some(0));
}

#[tokio::test]
async fn rejection_with_note_applies_and_carries_it() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs");
        s.seed_request(100, 1, 5, 0);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");

    let outcome = client
        .services
        .requests
        .decide(
            &requests[0],
            items.first(),
            Decision::Reject,
            "Stok dialihkan ke divisi lain",
            Confirmation::Confirmed,
        )
        .await
        .expect("reject");

    let Outcome::Applied(refreshed) = outcome else {
        panic!("rejection should apply");
    };
    assert_eq!(refreshed[0].status, RequestStatus::Rejected);
    assert_eq!(
        refreshed[0].admin_note.as_deref(),
        Some("Stok dialihkan ke divisi lain")
    );
    // Rejection must not touch stock.
    assert_eq!(app.with_state(|s| s.item_stock(1)), Some(50));
}

#[tokio::test]
async fn cancelled_confirmation_makes_no_call() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs");
        s.seed_request(100, 1, 5, 0);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");

    let outcome = client
        .services
        .requests
        .decide(
            &requests[0],
            items.first(),
            Decision::Approve,
            "",
            Confirmation::Cancelled,
        )
        .await
        .expect("cancelled");

    assert!(outcome.was_cancelled());
    assert_eq!(
        app.with_state(|s| s.hits("PUT /api/PermintaanBarang/{id}/status")),
        0
    );
}

#[tokio::test]
async fn decided_requests_reject_further_decisions_client_side() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs");
        s.seed_request(100, 1, 5, 1);
    });

    let items = client.services.items.list().await.expect("items");
    let requests = client.services.requests.list().await.expect("requests");

    let err = client
        .services
        .requests
        .decide(
            &requests[0],
            items.first(),
            Decision::Reject,
            "terlambat",
            Confirmation::Confirmed,
        )
        .await
        .expect_err("already decided");

    assert!(matches!(err, ClientError::InvalidOperation(_)));
    assert_eq!(
        app.with_state(|s| s.hits("PUT /api/PermintaanBarang/{id}/status")),
        0
    );
}

#[tokio::test]
async fn stale_decision_surfaces_server_conflict() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_item(1, "BRG001", "Pulpen", 50, "Pcs");
        s.seed_request(100, 1, 5, 0);
    });

    let items = client.services.items.list().await.expect("items");
    // Snapshot taken while the request was still pending.
    let stale = client.services.requests.list().await.expect("requests");

    // Another admin decides first.
    app.with_state(|s| {
        s.requests[0]["status"] = serde_json::json!(2);
    });

    let err = client
        .services
        .requests
        .decide(
            &stale[0],
            items.first(),
            Decision::Approve,
            "",
            Confirmation::Confirmed,
        )
        .await
        .expect_err("server conflict");

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Permintaan sudah diproses");
}

#[tokio::test]
async fn status_filter_uses_query_parameter() {
    let app = TestApp::spawn().await;
    let client = app.client();
    app.with_state(|s| {
        s.seed_request(100, 1, 5, 0);
        s.seed_request(101, 1, 2, 1);
        s.seed_request(102, 1, 3, 2);
    });

    let pending = client
        .services
        .requests
        .list_by_status(RequestStatus::Pending)
        .await
        .expect("pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 100);

    let rejected = client
        .services
        .requests
        .list_by_status(RequestStatus::Rejected)
        .await
        .expect("rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].id, 102);
}
