//! GetCurrentUserHandler - Query handler for the authenticated account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// Query for the caller's own account record.
#[derive(Debug, Clone)]
pub struct GetCurrentUserQuery {
    pub user_id: UserId,
}

/// Handler for fetching the current user.
pub struct GetCurrentUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetCurrentUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCurrentUserQuery) -> Result<User, UserError> {
        self.repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or(UserError::NotFound(query.user_id))
    }
}
