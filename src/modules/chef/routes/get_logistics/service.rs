use super::types::{request, response};
use crate::{modules::chef::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chef = repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
        .await
        .map_err(|_| response::Error::FailedToFetchLogistics)?
        .ok_or(response::Error::ChefNotOnboarded)?;

    Ok(response::Success::Logistics {
        base_location: chef.base_location,
        delivery_zones: chef.delivery_zones.0,
        payout_number: chef.payout_number,
    })
}
