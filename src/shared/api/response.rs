use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::modules::auth::application::guards::GuardError;
use crate::modules::auth::application::use_cases::list_users::ListUsersError;
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequestError};
use crate::modules::auth::application::use_cases::promote_user::PromoteError;
use crate::modules::auth::application::use_cases::register_user::RegisterError;
use crate::modules::event::application::use_cases::create_event::CreateEventError;
use crate::modules::event::application::use_cases::delete_event::DeleteEventError;
use crate::modules::event::application::use_cases::list_all_events::ListAllEventsError;

/// Wire envelope: `{success, data}` on the happy path, `{success, error}`
/// otherwise. Never both.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// The complete failure vocabulary of this API. Handlers convert their
/// use-case error into one of these via `From`; the HTTP status, wire code
/// and message are decided here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    Validation(String),
    UsernameTaken,
    InvalidCredentials,
    Unauthenticated,
    AdminRequired,
    UserNotFound,
    EventNotFound,
    Internal,
}

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiFailure::Validation(_) => StatusCode::BAD_REQUEST,
            ApiFailure::UsernameTaken => StatusCode::CONFLICT,
            ApiFailure::InvalidCredentials | ApiFailure::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            ApiFailure::AdminRequired => StatusCode::FORBIDDEN,
            ApiFailure::UserNotFound | ApiFailure::EventNotFound => StatusCode::NOT_FOUND,
            ApiFailure::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiFailure::Validation(_) => "VALIDATION_ERROR",
            ApiFailure::UsernameTaken => "USERNAME_TAKEN",
            ApiFailure::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiFailure::Unauthenticated => "UNAUTHENTICATED",
            ApiFailure::AdminRequired => "ADMIN_REQUIRED",
            ApiFailure::UserNotFound => "USER_NOT_FOUND",
            ApiFailure::EventNotFound => "EVENT_NOT_FOUND",
            ApiFailure::Internal => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiFailure::Validation(msg) => msg,
            ApiFailure::UsernameTaken => "Username already exists",
            ApiFailure::InvalidCredentials => "Invalid username or password",
            ApiFailure::Unauthenticated => "Authentication required",
            ApiFailure::AdminRequired => "Administrator access required",
            ApiFailure::UserNotFound => "User not found",
            ApiFailure::EventNotFound => "Event not found",
            ApiFailure::Internal => "An unexpected error occurred",
        }
    }
}

impl From<GuardError> for ApiFailure {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Unauthenticated => ApiFailure::Unauthenticated,
            GuardError::Forbidden => ApiFailure::AdminRequired,
        }
    }
}

impl From<RegisterError> for ApiFailure {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::EmptyUsername | RegisterError::EmptyPassword => {
                ApiFailure::Validation("Username and password are required".to_string())
            }
            RegisterError::UsernameTaken => ApiFailure::UsernameTaken,
            RegisterError::HashingFailed(_) | RegisterError::RepositoryError(_) => {
                ApiFailure::Internal
            }
        }
    }
}

impl From<LoginRequestError> for ApiFailure {
    fn from(err: LoginRequestError) -> Self {
        ApiFailure::Validation(err.to_string())
    }
}

impl From<LoginError> for ApiFailure {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ApiFailure::InvalidCredentials,
            LoginError::PasswordVerificationFailed(_)
            | LoginError::TokenGenerationFailed(_)
            | LoginError::QueryError(_) => ApiFailure::Internal,
        }
    }
}

impl From<PromoteError> for ApiFailure {
    fn from(err: PromoteError) -> Self {
        match err {
            PromoteError::UserNotFound => ApiFailure::UserNotFound,
            PromoteError::QueryError(_) | PromoteError::RepositoryError(_) => ApiFailure::Internal,
        }
    }
}

impl From<ListUsersError> for ApiFailure {
    fn from(err: ListUsersError) -> Self {
        match err {
            ListUsersError::QueryError(_) => ApiFailure::Internal,
        }
    }
}

impl From<CreateEventError> for ApiFailure {
    fn from(err: CreateEventError) -> Self {
        match err {
            CreateEventError::EmptyTitle => {
                ApiFailure::Validation("Title is required".to_string())
            }
            CreateEventError::EmptyDateTime => {
                ApiFailure::Validation("Event date/time is required".to_string())
            }
            CreateEventError::InvalidDateTime => ApiFailure::Validation(
                "Event date/time must look like 2024-03-01T09:30".to_string(),
            ),
            CreateEventError::RepositoryError(_) => ApiFailure::Internal,
        }
    }
}

impl From<ListAllEventsError> for ApiFailure {
    fn from(err: ListAllEventsError) -> Self {
        match err {
            ListAllEventsError::QueryError(_) => ApiFailure::Internal,
        }
    }
}

impl From<DeleteEventError> for ApiFailure {
    fn from(err: DeleteEventError) -> Self {
        match err {
            DeleteEventError::EventNotFound => ApiFailure::EventNotFound,
            DeleteEventError::RepositoryError(_) => ApiFailure::Internal,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn failure(failure: impl Into<ApiFailure>) -> HttpResponse {
        let failure = failure.into();
        HttpResponse::build(failure.status()).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: failure.code().to_string(),
                message: failure.message().to_string(),
            }),
        })
    }
}

/// Body deserialization failures use the same envelope and code as every
/// other validation failure.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let failure = ApiFailure::Validation(err.to_string());
        actix_web::error::InternalError::from_response(err, ApiResponse::failure(failure)).into()
    })
}
