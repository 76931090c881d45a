use super::types::{request, response};
use crate::{
    modules::{chef, meal::repository},
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

    if money::is_negative(&payload.body.price)
        || payload
            .body
            .add_ons
            .iter()
            .any(|add_on| money::is_negative(&add_on.price))
    {
        return Err(response::Error::InvalidPrice);
    }

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToCreateMeal)?
            .ok_or(response::Error::ChefNotOnboarded)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMealPayload {
            chef_id: chef.id,
            name: payload.body.name.trim().to_string(),
            description: payload.body.description,
            price: payload.body.price,
            category: payload.body.category,
            add_ons: payload.body.add_ons,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMeal)
    .map(response::Success::MealCreated)
}
