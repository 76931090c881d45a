mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;

#[tokio::test]
async fn missing_session_is_sent_to_login() {
    let (status, body) = common::send(common::get("/api/profile", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid session token");
    assert_eq!(body["redirect"], "/login");
}

#[tokio::test]
async fn admin_gate_sends_strangers_home() {
    let (status, body) = common::send(common::get("/api/admin/overview", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["redirect"], "/");
}

#[tokio::test]
async fn malformed_authorization_counts_as_no_session() {
    let request = Request::builder()
        .uri("/api/chefs/profile/dashboard")
        .header("authorization", "Basic Zm9vOmJhcg==")
        .body(Body::empty())
        .unwrap();

    let (status, body) = common::send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid session token");
}

#[tokio::test]
async fn session_lookup_failure_denies_every_gate() {
    let requests = vec![
        (common::get("/api/profile", Some("01J0TOKEN")), "/login"),
        (common::get("/api/orders/prep-summary", Some("01J0TOKEN")), "/login"),
        (common::get("/api/planned-meals?status=active", Some("01J0TOKEN")), "/login"),
        (
            common::json(
                "PUT",
                "/api/admin/chefs/01J0CHEF/approve",
                Some("01J0TOKEN"),
                json!({}),
            ),
            "/",
        ),
    ];

    for (request, redirect) in requests {
        let (status, body) = common::send(request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Failed to verify session");
        assert_eq!(body["redirect"], redirect);
    }
}

#[tokio::test]
async fn gate_runs_before_the_body_is_read() {
    let request = common::json(
        "POST",
        "/api/meals",
        None,
        json!({ "name": "Pilau", "price": "-1" }),
    );

    let (status, _) = common::send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signing_out_needs_a_session() {
    let (status, body) = common::send(common::json("POST", "/api/auth/sign-out", None, json!({}))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["redirect"], "/login");
}
