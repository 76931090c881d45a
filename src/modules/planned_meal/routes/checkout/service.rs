use super::types::{request, response};
use crate::{
    modules::planned_meal::{
        checkout,
        repository::{self, StatusFilter},
    },
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let delivery = checkout::validate(
        &payload.body.address,
        &payload.body.delivery,
        Utc::now().date_naive(),
    )
    .map_err(response::Error::InvalidCheckout)?;

    let lines = repository::find_lines_by_account_id(
        &ctx.db_conn.pool,
        payload.auth.identity.account_id,
        StatusFilter::Active,
    )
    .await
    .map_err(|_| response::Error::FailedToCheckout)?;

    Ok(response::Success::AwaitingPayment {
        address: payload.body.address.trim().to_string(),
        delivery,
        totals: repository::totals(&lines),
    })
}
