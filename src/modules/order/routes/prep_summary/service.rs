use super::types::{request, response};
use crate::{
    modules::{
        chef,
        order::{prep, repository},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToFetchPrepSummary)?
            .ok_or(response::Error::ChefNotOnboarded)?;

    let items = repository::find_prep_items_by_chef_id(&ctx.db_conn.pool, chef.id)
        .await
        .map_err(|_| response::Error::FailedToFetchPrepSummary)?;

    Ok(response::Success::PrepSummary(prep::summarize(&items)))
}
