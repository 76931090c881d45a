use super::types::{request, response};
use crate::{
    modules::{
        auth::observer::SessionEvent,
        chef::{discovery, repository},
    },
    types::Context,
};
use itertools::Itertools;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let account_id = payload.auth.identity.account_id;

    if repository::find_by_account_id(&ctx.db_conn.pool, account_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateChef)?
        .is_some()
    {
        return Err(response::Error::AlreadyOnboarded);
    }

    let food_types = payload
        .body
        .food_types
        .iter()
        .filter_map(|food_type| discovery::food_type(food_type))
        .unique()
        .map(String::from)
        .collect();

    let chef = repository::create(
        &ctx.db_conn.pool,
        repository::CreateChefPayload {
            account_id: account_id.clone(),
            business_name: payload.body.business_name.trim().to_string(),
            location: payload.body.location.trim().to_string(),
            bio: payload.body.bio.map(|bio| bio.trim().to_string()),
            food_types,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateChef)?;

    ctx.observer
        .publish(SessionEvent::ProfileChanged { account_id });

    Ok(response::Success::ChefCreated(chef))
}
