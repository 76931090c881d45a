use super::types::{request, response};
use crate::{
    modules::{chef, plan::repository},
    types::Context,
    utils::money,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if money::is_negative(&payload.body.price) {
        return Err(response::Error::InvalidPrice);
    }

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToCreatePlan)?
            .ok_or(response::Error::ChefNotOnboarded)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuPlanPayload {
            chef_id: chef.id,
            title: payload.body.title.trim().to_string(),
            description: payload.body.description,
            price: payload.body.price,
            duration: payload.body.duration,
            meals_per_week: payload.body.meals_per_week,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreatePlan)
    .map(response::Success::PlanCreated)
}
