//! GetStatsHandler - Query handler for cross-language practice statistics.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::PracticeStats;
use crate::ports::ProgressReader;

/// Query for a user's aggregate statistics.
#[derive(Debug, Clone)]
pub struct GetStatsQuery {
    pub user_id: UserId,
}

/// Handler for practice statistics.
pub struct GetStatsHandler {
    reader: Arc<dyn ProgressReader>,
}

impl GetStatsHandler {
    pub fn new(reader: Arc<dyn ProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetStatsQuery) -> Result<PracticeStats, DomainError> {
        let stats = self.reader.practice_stats(&query.user_id).await?;

        // The reader aggregates monotonic counters; negative values mean
        // the store violated the fold contract.
        if stats.total_conversations < 0 || stats.total_minutes < 0 || stats.languages_practiced < 0
        {
            return Err(DomainError::invariant(format!(
                "negative statistics for user {}: {:?}",
                query.user_id, stats
            )));
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPracticeStore;

    #[tokio::test]
    async fn fresh_user_gets_all_zeros() {
        let store = Arc::new(InMemoryPracticeStore::new());
        let handler = GetStatsHandler::new(store);

        let stats = handler
            .handle(GetStatsQuery {
                user_id: UserId::new(),
            })
            .await
            .unwrap();

        assert_eq!(stats, PracticeStats::default());
    }
}
