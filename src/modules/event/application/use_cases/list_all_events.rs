use async_trait::async_trait;

use crate::modules::event::application::domain::{entities::Event, schedule};
use crate::modules::event::application::ports::outgoing::EventQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAllEventsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Admin dashboard read: bypasses the visibility filter entirely.
#[async_trait]
pub trait IListAllEventsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Event>, ListAllEventsError>;
}

#[derive(Clone)]
pub struct ListAllEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListAllEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListAllEventsUseCase for ListAllEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Event>, ListAllEventsError> {
        let mut events = self
            .query
            .list_all()
            .await
            .map_err(|e| ListAllEventsError::QueryError(e.to_string()))?;

        // Same re-sort as the user-facing listing: legacy rows don't order
        // correctly as text.
        schedule::sort_chronological(&mut events);
        Ok(events)
    }
}
