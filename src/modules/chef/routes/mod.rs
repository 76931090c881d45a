mod categories;
mod create;
mod dashboard;
mod get;
mod get_logistics;
mod list;
mod update;
mod update_logistics;
mod update_photo;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(categories::get_router())
        .merge(dashboard::get_router())
        .merge(update::get_router())
        .merge(get_logistics::get_router())
        .merge(update_logistics::get_router())
        .merge(update_photo::get_router())
        .merge(get::get_router())
}
