pub mod gate;
pub mod landing;
pub mod middleware;
pub mod observer;
pub mod repository;
pub mod role;
pub mod service;

mod routes;
pub use routes::get_router;
