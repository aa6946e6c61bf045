use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert_event(&self, event: Event) -> Result<Event, EventRepositoryError>;

    /// Permanent removal of a single row; no soft delete, no cascades.
    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;
}

#[derive(Debug)]
pub enum EventRepositoryError {
    EventNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for EventRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventRepositoryError::EventNotFound => write!(f, "Event not found"),
            EventRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
