//! Identity HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::AuthHandlers;
pub use routes::auth_routes;
