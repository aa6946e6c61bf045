use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, PromoteResponse, RegisterRequestDto,
    RegisteredUser, UserSummary,
};
use crate::modules::event::adapter::incoming::web::routes::{
    CreateEventDto, EventDto, EventListingResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventboard API",
        version = "1.0.0",
        description = "Shared event board with role-based visibility"
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,

        // Events
        crate::modules::event::adapter::incoming::web::routes::get_events_handler,
        crate::modules::event::adapter::incoming::web::routes::create_event_handler,

        // Admin
        crate::modules::auth::adapter::incoming::web::routes::list_users_handler,
        crate::modules::auth::adapter::incoming::web::routes::promote_user_handler,
        crate::modules::event::adapter::incoming::web::routes::get_all_events_handler,
        crate::modules::event::adapter::incoming::web::routes::delete_event_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterRequestDto,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            UserSummary,
            PromoteResponse,

            CreateEventDto,
            EventDto,
            EventListingResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "events", description = "Event listing and creation"),
        (name = "admin", description = "Admin dashboard operations"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
