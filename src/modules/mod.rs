pub mod admin;
pub mod auth;
pub mod chef;
pub mod meal;
pub mod order;
pub mod plan;
pub mod planned_meal;
pub mod profile;
pub mod waitlist;

mod router;
pub use router::get_router;
