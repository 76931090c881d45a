use super::types::{request, response};
use crate::{
    modules::{meal, planned_meal::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let meal = meal::repository::find_by_id(&ctx.db_conn.pool, payload.body.meal_id)
        .await
        .map_err(|_| response::Error::FailedToPlanMeal)?
        .ok_or(response::Error::MealNotFound)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreatePlannedMealPayload {
            account_id: payload.auth.identity.account_id,
            meal_id: meal.id,
            chef_id: meal.chef_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToPlanMeal)
    .map(response::Success::MealPlanned)
}
