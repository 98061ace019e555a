//! Application command and query handlers.
//!
//! One submodule per concern, each handler owning its ports as
//! `Arc<dyn Trait>` so adapters stay swappable.

pub mod auth;
pub mod catalog;
pub mod conversation;
pub mod progress;
