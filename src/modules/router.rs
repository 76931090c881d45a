use super::{admin, auth, chef, meal, order, plan, planned_meal, profile, waitlist};
use crate::types::Context;
use axum::{
    http::StatusCode,
    routing::{get, Router},
    Json,
};
use serde_json::json;
use std::sync::Arc;

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/profile", profile::get_router())
        .nest("/chefs", chef::get_router())
        .nest("/meals", meal::get_router())
        .nest("/plans", plan::get_router())
        .nest("/planned-meals", planned_meal::get_router())
        .nest("/orders", order::get_router())
        .nest("/admin", admin::get_router())
        .nest("/waitlist", waitlist::get_router())
}
