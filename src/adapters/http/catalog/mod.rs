//! Language catalog HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::CatalogHandlers;
pub use routes::language_routes;
