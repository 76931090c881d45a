use super::types::{request, response};
use crate::{
    modules::planned_meal::planner::{self, DatabasePlanner, RemoveError},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let planner = DatabasePlanner {
        pool: ctx.db_conn.pool.clone(),
    };

    planner::remove_line(&planner, payload.id, payload.auth.identity.account_id)
        .await
        .map_err(|err| match err {
            RemoveError::NotFound => response::Error::PlannedMealNotFound,
            RemoveError::Failed => response::Error::FailedToRemovePlannedMeal,
        })
        .map(response::Success::PlannedMealRemoved)
}
