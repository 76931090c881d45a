use super::types::{request, response};
use crate::{modules::profile::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::ProfileNotFound)
        .map(response::Success::Profile)
}
