use super::types::{request, response};
use crate::{modules::auth::role, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.observer
        .identity(&payload.session.id, &payload.session.account_id)
        .await
        .map(response::Success::Identity)
        .map_err(|err| match err {
            role::Error::AccountNotFound => response::Error::AccountNotFound,
            role::Error::UnexpectedError => response::Error::FailedToFetchSession,
        })
}
