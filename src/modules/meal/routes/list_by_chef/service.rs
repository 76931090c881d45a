use super::types::{request, response};
use crate::{modules::meal::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many_by_chef_id(&ctx.db_conn.pool, payload.chef_id)
        .await
        .map_err(|_| response::Error::FailedToFetchMeals)
        .map(response::Success::Meals)
}
