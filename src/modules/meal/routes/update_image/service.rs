use super::types::{request, response};
use crate::{
    modules::{chef, meal::repository},
    types::Context,
    utils::storage,
};
use std::{io::Read, sync::Arc};

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    let meal = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateMeal)?
        .ok_or(response::Error::MealNotFound)?;

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToUpdateMeal)?;

    if chef.map(|chef| chef.id) != Some(meal.chef_id.clone()) {
        return Err(response::Error::NotMealOwner);
    }

    let mut buf: Vec<u8> = vec![];
    payload
        .body
        .image
        .contents
        .read_to_end(&mut buf)
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            response::Error::FailedToUploadImage
        })?;

    let image = storage::replace_file(ctx.storage.clone(), meal.image.map(|image| image.0), buf)
        .await
        .map_err(|_| response::Error::FailedToUploadImage)?;

    repository::update_image_by_id(&ctx.db_conn.pool, meal.id, image)
        .await
        .map_err(|_| response::Error::FailedToUpdateMeal)
        .map(response::Success::ImageUpdated)
}
