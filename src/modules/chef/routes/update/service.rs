use super::types::{request, response};
use crate::{
    modules::{auth::observer::SessionEvent, chef::repository, profile},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let account_id = payload.auth.identity.account_id;
    let location = trimmed(payload.body.location);
    let phone = trimmed(payload.body.phone);

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateChef
    })?;

    let chef = repository::find_by_account_id(&mut *tx, account_id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateChef)?
        .ok_or(response::Error::ChefNotOnboarded)?;

    let chef = repository::update_by_id(
        &mut *tx,
        chef.id,
        repository::UpdateChefPayload {
            business_name: trimmed(payload.body.business_name),
            bio: trimmed(payload.body.bio),
            location: location.clone(),
            phone: phone.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateChef)?;

    profile::repository::update_contact(
        &mut *tx,
        account_id.clone(),
        profile::repository::UpdateContactPayload { location, phone },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateChef)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToUpdateChef
    })?;

    ctx.observer
        .publish(SessionEvent::ProfileChanged { account_id });

    Ok(response::Success::ChefUpdated(chef))
}
