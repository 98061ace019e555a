//! Progress and statistics query handlers.
//!
//! Read models over what the completion fold has accumulated; correctness
//! rests on the invariants the lifecycle engine upholds at write time.

mod get_stats;
mod list_progress;

pub use get_stats::{GetStatsHandler, GetStatsQuery};
pub use list_progress::{ListProgressHandler, ListProgressQuery};
