use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::outgoing::{
    EventRepository, EventRepositoryError,
};

use super::event_query_postgres::model_to_event;
use super::sea_orm_entity::events::{ActiveModel, Entity as EventEntity};

#[derive(Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn insert_event(&self, event: Event) -> Result<Event, EventRepositoryError> {
        let active = ActiveModel {
            id: Set(event.id),
            title: Set(event.title),
            description: Set(event.description),
            event_datetime: Set(event.event_datetime),
            location: Set(event.location),
            created_by: Set(event.created_by),
            visible_to_all: Set(event.visible_to_all),
            created_at: Set(event.created_at.into()),
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| EventRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_event(model))
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        let result = EventEntity::delete_by_id(event_id)
            .exec(&*self.db)
            .await
            .map_err(|e| EventRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::EventNotFound);
        }
        Ok(())
    }
}
