use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::ports::outgoing::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteEventError {
    EventNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteEventError::EventNotFound => write!(f, "Event not found"),
            DeleteEventError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteEventError {}

#[async_trait]
pub trait IDeleteEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<(), DeleteEventError>;
}

#[derive(Clone)]
pub struct DeleteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteEventUseCase for DeleteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<(), DeleteEventError> {
        match self.repository.delete_event(event_id).await {
            Ok(()) => Ok(()),
            Err(EventRepositoryError::EventNotFound) => Err(DeleteEventError::EventNotFound),
            Err(e) => Err(DeleteEventError::RepositoryError(e.to_string())),
        }
    }
}
