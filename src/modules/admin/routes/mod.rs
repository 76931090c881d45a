mod approve;
mod overview;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(overview::get_router())
        .merge(approve::get_router())
}
