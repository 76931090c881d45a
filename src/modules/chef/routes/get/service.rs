use super::types::{request, response};
use crate::{
    modules::{chef::repository, meal},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chef = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchChef)?
        .ok_or(response::Error::ChefNotFound)?;

    let meals = meal::repository::find_many_by_chef_id(&ctx.db_conn.pool, chef.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchChef)?;

    Ok(response::Success::Chef { chef, meals })
}
