use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Events readable by the given user (public or owned), ascending by
    /// event datetime.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Event>, EventQueryError>;

    /// Every event, ascending by event datetime. Admin dashboard only; no
    /// visibility filtering.
    async fn list_all(&self) -> Result<Vec<Event>, EventQueryError>;
}
