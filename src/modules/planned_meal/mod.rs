pub mod checkout;
pub mod planner;
pub mod repository;
mod routes;

pub use routes::get_router;
