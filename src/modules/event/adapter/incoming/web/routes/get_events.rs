use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::EventDto;

#[derive(Serialize, ToSchema)]
pub struct EventListingResponse {
    /// Everything the caller may read, ordered by event time
    pub events: Vec<EventDto>,
    /// Subset of `events` starting within the notification window
    pub notifications: Vec<EventDto>,
    /// Width of the notification window in hours
    #[schema(example = 24)]
    pub notify_hours: i64,
}

/// List visible events
///
/// Returns public events plus the caller's own, with the ones starting
/// within the next 24 hours repeated under `notifications`.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Visible events", body = inline(SuccessResponse<EventListingResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/events")]
pub async fn get_events_handler(
    identity: MaybeIdentity,
    data: web::Data<AppState>,
) -> impl Responder {
    let actor = match guards::require_authenticated(identity.as_ref()) {
        Ok(actor) => actor,
        Err(e) => return ApiResponse::failure(e),
    };

    let listing = data.list_events_use_case.execute(actor).await;

    ApiResponse::success(EventListingResponse {
        events: listing.events.into_iter().map(EventDto::from).collect(),
        notifications: listing
            .notifications
            .into_iter()
            .map(EventDto::from)
            .collect(),
        notify_hours: listing.notify_hours,
    })
}
