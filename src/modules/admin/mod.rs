pub mod overview;
mod routes;

pub use routes::get_router;
