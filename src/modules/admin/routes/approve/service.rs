use super::types::{request, response};
use crate::{
    modules::admin::overview::{self, ApprovalError, DatabaseDesk},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let desk = DatabaseDesk {
        pool: ctx.db_conn.pool.clone(),
    };

    let (chef, overview) = overview::approve(&desk, &ctx.observer, payload.id)
        .await
        .map_err(|err| match err {
            ApprovalError::ChefNotFound => response::Error::ChefNotFound,
            ApprovalError::ApproveFailed => response::Error::FailedToApproveChef,
            ApprovalError::ReloadFailed => response::Error::FailedToFetchOverview,
        })?;

    tracing::info!(
        "Chef {} approved by {}",
        chef.id,
        payload.auth.identity.email
    );

    Ok(response::Success::ChefApproved(overview))
}
