use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::modules::event::application::use_cases::create_event::{
    CreateEventError, NewEventInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::EventDto;

#[derive(Deserialize, ToSchema)]
pub struct CreateEventDto {
    #[schema(example = "Team sync")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Accepts "YYYY-MM-DDTHH:MM", "YYYY-MM-DDTHH:MM:SS" or
    /// "YYYY-MM-DD HH:MM:SS"
    #[schema(example = "2024-03-01T09:30")]
    pub event_datetime: String,

    #[serde(default)]
    pub location: Option<String>,

    /// Request public visibility. Honored only for admin callers; for
    /// everyone else the event is stored private.
    #[serde(default)]
    pub public: bool,
}

/// Create an event
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = CreateEventDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Event created", body = inline(SuccessResponse<EventDto>)),
        (status = 400, description = "Missing title or bad date/time", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/events")]
pub async fn create_event_handler(
    identity: MaybeIdentity,
    req: web::Json<CreateEventDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let actor = match guards::require_authenticated(identity.as_ref()) {
        Ok(actor) => actor,
        Err(e) => return ApiResponse::failure(e),
    };

    let dto = req.into_inner();
    let input = NewEventInput {
        title: dto.title,
        description: dto.description.unwrap_or_default(),
        event_datetime: dto.event_datetime,
        location: dto.location.unwrap_or_default(),
        want_public: dto.public,
    };

    match data.create_event_use_case.execute(actor, input).await {
        Ok(event) => {
            info!(event_id = %event.id, creator = %actor.username, "Event created");
            ApiResponse::created(EventDto::from(event))
        }

        Err(err) => {
            if let CreateEventError::RepositoryError(e) = &err {
                error!(error = %e, "Event insert failed");
            }
            ApiResponse::failure(err)
        }
    }
}
