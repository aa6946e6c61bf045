use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::modules::auth::application::use_cases::promote_user::PromoteError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PromoteResponse {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "admin")]
    pub role: String,
}

/// Promote a user to admin
///
/// Idempotent: promoting an existing admin succeeds without change.
/// There is no demotion counterpart.
#[utoipa::path(
    post,
    path = "/api/admin/users/{username}/promote",
    tag = "admin",
    params(("username" = String, Path, description = "Username to promote")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "User is now an admin", body = inline(SuccessResponse<PromoteResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{username}/promote")]
pub async fn promote_user_handler(
    identity: MaybeIdentity,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let actor = match guards::require_admin(identity.as_ref()) {
        Ok(actor) => actor,
        Err(e) => return ApiResponse::failure(e),
    };

    let target = path.into_inner();

    match data.promote_user_use_case.execute(&target).await {
        Ok(()) => {
            info!(admin = %actor.username, target = %target, "User promoted to admin");
            ApiResponse::success(PromoteResponse {
                username: target,
                role: "admin".to_string(),
            })
        }

        Err(err) => {
            match &err {
                PromoteError::QueryError(e) | PromoteError::RepositoryError(e) => {
                    error!(error = %e, target = %target, "Promotion failed")
                }
                PromoteError::UserNotFound => {}
            }
            ApiResponse::failure(err)
        }
    }
}
