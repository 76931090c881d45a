use super::types::{request, response};
use crate::{
    modules::chef::repository,
    types::Context,
    utils::storage,
};
use std::{io::Read, sync::Arc};

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    let chef = repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
        .await
        .map_err(|_| response::Error::FailedToUpdatePhoto)?
        .ok_or(response::Error::ChefNotOnboarded)?;

    let mut buf: Vec<u8> = vec![];
    payload
        .body
        .photo
        .contents
        .read_to_end(&mut buf)
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            response::Error::FailedToUploadPhoto
        })?;

    let photo = storage::replace_file(
        ctx.storage.clone(),
        chef.profile_photo.map(|photo| photo.0),
        buf,
    )
    .await
    .map_err(|_| response::Error::FailedToUploadPhoto)?;

    repository::update_photo_by_id(&ctx.db_conn.pool, chef.id, photo)
        .await
        .map_err(|_| response::Error::FailedToUpdatePhoto)
        .map(response::Success::PhotoUpdated)
}
