use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::modules::event::application::use_cases::delete_event::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

/// Delete an event (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/events/{event_id}",
    tag = "admin",
    params(("event_id" = Uuid, Path, description = "Event to delete")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such event", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/events/{event_id}")]
pub async fn delete_event_handler(
    identity: MaybeIdentity,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let actor = match guards::require_admin(identity.as_ref()) {
        Ok(actor) => actor,
        Err(e) => return ApiResponse::failure(e),
    };

    let event_id = path.into_inner();

    match data.delete_event_use_case.execute(event_id).await {
        Ok(()) => {
            info!(event_id = %event_id, admin = %actor.username, "Event deleted");
            ApiResponse::no_content()
        }

        Err(err) => {
            if let DeleteEventError::RepositoryError(e) = &err {
                error!(error = %e, event_id = %event_id, "Event delete failed");
            }
            ApiResponse::failure(err)
        }
    }
}
