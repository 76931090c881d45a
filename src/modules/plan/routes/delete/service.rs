use super::types::{request, response};
use crate::{
    modules::{chef, plan::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let plan = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePlan)?
        .ok_or(response::Error::PlanNotFound)?;

    let chef =
        chef::repository::find_by_account_id(&ctx.db_conn.pool, payload.auth.identity.account_id)
            .await
            .map_err(|_| response::Error::FailedToDeletePlan)?;

    if chef.map(|chef| chef.id) != Some(plan.chef_id) {
        return Err(response::Error::NotPlanOwner);
    }

    repository::delete_by_id(&ctx.db_conn.pool, plan.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePlan)
        .map(|_| response::Success::PlanDeleted)
}
