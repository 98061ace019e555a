//! Progress and statistics HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::ProgressHandlers;
pub use routes::progress_routes;
