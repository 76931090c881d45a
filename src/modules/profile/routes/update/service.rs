use super::types::{request, response};
use crate::{
    modules::{auth::observer::SessionEvent, profile::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let account_id = payload.auth.identity.account_id;
    let profile = repository::update_full_name(
        &ctx.db_conn.pool,
        account_id.clone(),
        payload.body.full_name.trim().to_string(),
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)?
    .ok_or(response::Error::ProfileNotFound)?;

    ctx.observer
        .publish(SessionEvent::ProfileChanged { account_id });

    Ok(response::Success::ProfileUpdated(profile))
}
