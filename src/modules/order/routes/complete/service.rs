use super::types::{request, response};
use crate::{
    modules::{chef, order::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToCompleteOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToCompleteOrder)?;

    if chef.map(|chef| chef.id) != Some(order.chef_id) {
        return Err(response::Error::NotOrderChef);
    }

    repository::mark_completed(&ctx.db_conn.pool, order.id)
        .await
        .map_err(|_| response::Error::FailedToCompleteOrder)
        .map(response::Success::OrderCompleted)
}
