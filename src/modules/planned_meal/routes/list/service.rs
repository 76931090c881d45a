use super::types::{request, response};
use crate::{modules::planned_meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let lines = repository::find_lines_by_account_id(
        &ctx.db_conn.pool,
        payload.auth.identity.account_id,
        payload.filters.status,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchPlannedMeals)?;

    let totals = repository::totals(&lines);

    Ok(response::Success::PlannedMeals { lines, totals })
}
