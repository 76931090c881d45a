use super::{service::service, types::request};
use crate::{modules::auth::middleware::FoodieAuth, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, auth: FoodieAuth) -> impl IntoResponse {
    service(ctx, request::Payload { auth }).await
}
