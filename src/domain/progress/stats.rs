//! Cross-language practice statistics read model.

use serde::{Deserialize, Serialize};

/// Aggregate practice statistics for one user across all languages.
///
/// All fields are plain counters: a user with no completed sessions gets
/// zeros, never nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PracticeStats {
    /// Number of completed conversations owned by the user.
    pub total_conversations: i64,

    /// Sum of `total_duration_minutes` over the user's progress rows.
    pub total_minutes: i64,

    /// Number of distinct languages with at least one completed session.
    pub languages_practiced: i64,
}
