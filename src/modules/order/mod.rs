pub mod middleware;
pub mod repository;
mod routes;
mod validation;

pub use routes::get_router;
