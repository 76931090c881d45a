use super::types::{request, response};
use crate::{modules::order::repository, types::Context, utils::money};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let orders =
        repository::find_lines_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToFetchOrders)?;

    let total_spent = money::sum(orders.iter().map(|order| Some(&order.meal_price)));

    Ok(response::Success::Orders {
        orders,
        total_spent,
    })
}
