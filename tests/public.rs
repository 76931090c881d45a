mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_check() {
    let (status, body) = common::send(common::get("/api/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn categories_are_listed_in_order() {
    let (status, body) = common::send(common::get("/api/chefs/categories", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!(["All", "Swahili", "Vegan", "Keto", "Grill", "Pastry", "Healthy"])
    );
}

#[tokio::test]
async fn sign_up_validates_before_touching_the_database() {
    let request = common::json(
        "POST",
        "/api/auth/sign-up/chef",
        None,
        json!({ "email": "not-an-email", "password": "12345", "full_name": "  " }),
    );

    let (status, body) = common::send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["email"][0]["code"], "INVALID_EMAIL");
    assert_eq!(body["errors"]["password"][0]["code"], "INVALID_PASSWORD");
    assert_eq!(body["errors"]["full_name"][0]["code"], "INVALID_FULL_NAME");
}

#[tokio::test]
async fn waitlist_rejects_bad_emails() {
    let request = common::json(
        "POST",
        "/api/waitlist",
        None,
        json!({ "email": "nope", "type": "chef" }),
    );

    let (status, body) = common::send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["email"][0]["code"], "INVALID_EMAIL");
}

#[tokio::test]
async fn waitlist_only_knows_users_and_chefs() {
    let request = common::json(
        "POST",
        "/api/waitlist",
        None,
        json!({ "email": "wanjiru@qavaeat.test", "type": "investor" }),
    );

    let (status, _) = common::send(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn database_outage_surfaces_as_a_json_error() {
    let (status, body) = common::send(common::get("/api/chefs?search=mombasa", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch kitchens");
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let (status, _) = common::send(common::get("/api/kitchens", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
