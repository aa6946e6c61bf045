mod create_event;
mod delete_event;
mod get_all_events;
mod get_events;

pub use create_event::{__path_create_event_handler, create_event_handler, CreateEventDto};
pub use delete_event::{__path_delete_event_handler, delete_event_handler};
pub use get_all_events::{__path_get_all_events_handler, get_all_events_handler};
pub use get_events::{__path_get_events_handler, get_events_handler, EventListingResponse};

use crate::modules::event::application::domain::entities::Event;
use serde::Serialize;
use utoipa::ToSchema;

/// Wire shape for a single event, shared by the user listing and the
/// admin dashboard.
#[derive(Serialize, ToSchema)]
pub struct EventDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Team sync")]
    pub title: String,
    pub description: Option<String>,
    /// Canonical "YYYY-MM-DD HH:MM:SS"
    #[schema(example = "2024-03-01 09:30:00")]
    pub event_datetime: String,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub visible_to_all: bool,
    pub created_at: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        EventDto {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            event_datetime: event.event_datetime,
            location: event.location,
            created_by: event.created_by.map(|id| id.to_string()),
            visible_to_all: event.visible_to_all,
            created_at: event.created_at.to_rfc3339(),
        }
    }
}
