mod complete;
mod list;
mod prep_summary;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(prep_summary::get_router())
        .merge(complete::get_router())
}
