//! Progress reader port (read side of the statistics engine).
//!
//! Summarizes what the completion fold has accumulated. Pure reads; the
//! three stats counters are independently monotonic, so slight read skew
//! between them is tolerated and no cross-query transaction is required.

use crate::domain::catalog::Language;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::PracticeStats;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for per-language progress and cross-language statistics.
#[async_trait]
pub trait ProgressReader: Send + Sync {
    /// List a user's progress rows with language reference data embedded.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressView>, DomainError>;

    /// Aggregate statistics for a user.
    ///
    /// A user with no completed sessions gets all-zero counters.
    async fn practice_stats(&self, user_id: &UserId) -> Result<PracticeStats, DomainError>;
}

/// One per-language progress row for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressView {
    pub language: Language,
    pub sessions_count: i64,
    pub total_duration_minutes: i64,
    pub last_session_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn progress_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ProgressReader) {}
    }
}
