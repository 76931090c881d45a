use super::types::{request, response};
use crate::{modules::waitlist::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::join(
        &ctx.db_conn.pool,
        payload.email.trim().to_lowercase(),
        payload.kind,
    )
    .await
    .map_err(|_| response::Error::FailedToJoinWaitlist)
    .map(|_| response::Success::Joined)
}
