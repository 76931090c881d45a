use super::types::response;
use crate::{modules::admin::overview, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    overview::load(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchOverview)
        .map(response::Success::Overview)
}
