use super::types::{request, response};
use crate::{
    modules::{chef, meal::repository},
    types::Context,
    utils::storage,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let meal = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteMeal)?
        .ok_or(response::Error::MealNotFound)?;

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToDeleteMeal)?;

    if chef.map(|chef| chef.id) != Some(meal.chef_id.clone()) {
        return Err(response::Error::NotMealOwner);
    }

    let image = meal.image.clone();
    repository::delete_by_id(&ctx.db_conn.pool, meal.id.clone())
        .await
        .map_err(|err| match err {
            repository::Error::MealInUse => response::Error::MealInUse,
            repository::Error::UnexpectedError => response::Error::FailedToDeleteMeal,
        })?;

    if let Some(image) = image {
        let cfg = ctx.storage.clone();
        tokio::spawn(async move {
            if storage::delete_file(cfg, image.0).await.is_err() {
                tracing::warn!("Image of deleted meal {} was left in storage", meal.id);
            }
        });
    }

    Ok(response::Success::MealDeleted)
}
