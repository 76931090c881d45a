use super::types::{request, response};
use crate::{
    modules::chef::{logistics, repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chef = repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateLogistics)?
        .ok_or(response::Error::ChefNotOnboarded)?;

    repository::update_logistics_by_id(
        &ctx.db_conn.pool,
        chef.id,
        repository::UpdateLogisticsPayload {
            base_location: payload.body.base_location.trim().to_string(),
            delivery_zones: logistics::normalize_zones(payload.body.delivery_zones),
            payout_number: payload.body.payout_number.trim().to_string(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateLogistics)
    .map(response::Success::LogisticsUpdated)
}
