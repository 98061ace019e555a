//! ListProgressHandler - Query handler for per-language progress rows.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ProgressReader, ProgressView};

/// Query for a user's per-language progress.
#[derive(Debug, Clone)]
pub struct ListProgressQuery {
    pub user_id: UserId,
}

/// Handler for listing progress rows.
pub struct ListProgressHandler {
    reader: Arc<dyn ProgressReader>,
}

impl ListProgressHandler {
    pub fn new(reader: Arc<dyn ProgressReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListProgressQuery) -> Result<Vec<ProgressView>, DomainError> {
        self.reader.list_by_user(&query.user_id).await
    }
}
