use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::outgoing::{EventQuery, EventQueryError};

use super::sea_orm_entity::events::{Column, Entity as EventEntity, Model as EventModel};

#[derive(Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_event(model: EventModel) -> Event {
    Event {
        id: model.id,
        title: model.title,
        description: model.description,
        event_datetime: model.event_datetime,
        location: model.location,
        created_by: model.created_by,
        visible_to_all: model.visible_to_all,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Event>, EventQueryError> {
        // Canonical datetime strings sort chronologically as text. Legacy
        // `T`-separated rows do not, so the use cases re-sort after parsing;
        // the column order here is a first approximation only.
        EventEntity::find()
            .filter(
                Condition::any()
                    .add(Column::VisibleToAll.eq(true))
                    .add(Column::CreatedBy.eq(user_id)),
            )
            .order_by_asc(Column::EventDatetime)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_event).collect())
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventQueryError> {
        EventEntity::find()
            .order_by_asc(Column::EventDatetime)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_event).collect())
            .map_err(|e| EventQueryError::DatabaseError(e.to_string()))
    }
}
