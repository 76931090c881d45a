use super::types::{request, response};
use crate::{
    modules::chef::{discovery, repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let chefs = repository::find_many_approved(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchChefs)?;

    Ok(response::Success::Chefs(discovery::filter(
        chefs,
        payload.filters.search.as_deref(),
        payload.filters.category.as_deref(),
    )))
}
