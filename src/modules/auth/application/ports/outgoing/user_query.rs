use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    /// Exact-match lookup; no casing or whitespace normalization.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// All users ordered ascending by creation time (admin dashboard).
    async fn list_all(&self) -> Result<Vec<User>, UserQueryError>;

    async fn count_users(&self) -> Result<u64, UserQueryError>;
}
