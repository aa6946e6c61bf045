use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "user")]
    pub role: String,
    pub created_at: String,
}

/// List all accounts (admin dashboard)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All registered users", body = inline(SuccessResponse<Vec<UserSummary>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(
    identity: MaybeIdentity,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(e) = guards::require_admin(identity.as_ref()) {
        return ApiResponse::failure(e);
    }

    match data.list_users_use_case.execute().await {
        Ok(users) => {
            let summaries: Vec<UserSummary> = users
                .into_iter()
                .map(|user| UserSummary {
                    id: user.id.to_string(),
                    username: user.username,
                    role: user.role.as_str().to_string(),
                    created_at: user.created_at.to_rfc3339(),
                })
                .collect();
            ApiResponse::success(summaries)
        }

        Err(err) => {
            error!(error = %err, "User listing failed");
            ApiResponse::failure(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, User};
    use crate::modules::auth::application::use_cases::list_users::{
        IListUsersUseCase, ListUsersError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, user_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockListUsers;

    #[async_trait]
    impl IListUsersUseCase for MockListUsers {
        async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
            Ok(vec![User {
                id: Uuid::new_v4(),
                username: "alice".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Admin,
                created_at: chrono::Utc::now(),
            }])
        }
    }

    #[actix_web::test]
    async fn admin_sees_users_without_password_hashes() {
        let (state, token_provider) = TestAppStateBuilder::default()
            .with_list_users(MockListUsers)
            .build_with_tokens();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider.clone())
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", admin_bearer(&token_provider)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["username"], "alice");
        assert!(body["data"][0].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn plain_user_is_forbidden() {
        let (state, token_provider) = TestAppStateBuilder::default()
            .with_list_users(MockListUsers)
            .build_with_tokens();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider.clone())
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(("Authorization", user_bearer(&token_provider)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
