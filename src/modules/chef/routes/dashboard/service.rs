use super::types::{request, response};
use crate::{
    modules::{chef::repository, meal},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chef = repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?
        .ok_or(response::Error::ChefNotOnboarded)?;

    let meal_count = meal::repository::count_by_chef_id(&ctx.db_conn.pool, chef.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    Ok(response::Success::Dashboard { chef, meal_count })
}
