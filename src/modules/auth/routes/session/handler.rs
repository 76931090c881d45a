use super::{service::service, types::request};
use crate::{modules::auth::middleware::CurrentSession, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    CurrentSession { session }: CurrentSession,
) -> impl IntoResponse {
    service(ctx, request::Payload { session }).await
}
