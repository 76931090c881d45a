pub mod discovery;
pub mod logistics;
pub mod repository;
mod routes;

pub use routes::get_router;
