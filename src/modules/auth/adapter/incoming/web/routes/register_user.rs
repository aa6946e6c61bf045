use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_user::RegisterError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Desired username, unique across the system
    #[schema(example = "johndoe")]
    pub username: String,

    /// Password, stored only as a salted hash
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "user")]
    pub role: String,
}

/// Register a new account
///
/// Creates a regular user. Roles are never assigned at registration;
/// only an existing admin can promote the account afterwards.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisteredUser>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Registration attempt");

    match data
        .register_user_use_case
        .execute(dto.username, dto.password)
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");
            ApiResponse::created(RegisteredUser {
                id: user.id.to_string(),
                username: user.username,
                role: user.role.as_str().to_string(),
            })
        }

        Err(err) => {
            match &err {
                RegisterError::UsernameTaken => warn!("Registration failed: username taken"),
                RegisterError::HashingFailed(e) => error!(error = %e, "Password hashing failed"),
                RegisterError::RepositoryError(e) => error!(error = %e, "User insert failed"),
                RegisterError::EmptyUsername | RegisterError::EmptyPassword => {}
            }
            ApiResponse::failure(err)
        }
    }
}
