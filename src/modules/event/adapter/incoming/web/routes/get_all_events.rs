use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::MaybeIdentity;
use crate::modules::auth::application::guards;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::EventDto;

/// List every event (admin dashboard)
///
/// No visibility filter: private events of all users are included.
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All events", body = inline(SuccessResponse<Vec<EventDto>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/events")]
pub async fn get_all_events_handler(
    identity: MaybeIdentity,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(e) = guards::require_admin(identity.as_ref()) {
        return ApiResponse::failure(e);
    }

    match data.list_all_events_use_case.execute().await {
        Ok(events) => {
            let dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();
            ApiResponse::success(dtos)
        }

        Err(err) => {
            error!(error = %err, "Admin event listing failed");
            ApiResponse::failure(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::event::application::domain::entities::Event;
    use crate::modules::event::application::use_cases::list_all_events::{
        IListAllEventsUseCase, ListAllEventsError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, user_bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockAllEvents;

    #[async_trait]
    impl IListAllEventsUseCase for MockAllEvents {
        async fn execute(&self) -> Result<Vec<Event>, ListAllEventsError> {
            Ok(vec![Event {
                id: Uuid::new_v4(),
                title: "private offsite".to_string(),
                description: None,
                event_datetime: "2030-06-01 10:00:00".to_string(),
                location: None,
                created_by: Some(Uuid::new_v4()),
                visible_to_all: false,
                created_at: chrono::Utc::now(),
            }])
        }
    }

    #[derive(Clone)]
    struct MockAllEventsFailing;

    #[async_trait]
    impl IListAllEventsUseCase for MockAllEventsFailing {
        async fn execute(&self) -> Result<Vec<Event>, ListAllEventsError> {
            Err(ListAllEventsError::QueryError("down".to_string()))
        }
    }

    #[actix_web::test]
    async fn admin_sees_private_events_of_others() {
        let (state, token_provider) = TestAppStateBuilder::default()
            .with_list_all_events(MockAllEvents)
            .build_with_tokens();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider.clone())
                .service(get_all_events_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/events")
            .insert_header(("Authorization", admin_bearer(&token_provider)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "private offsite");
        assert_eq!(body["data"][0]["visible_to_all"], false);
    }

    #[actix_web::test]
    async fn plain_user_is_forbidden() {
        let (state, token_provider) = TestAppStateBuilder::default()
            .with_list_all_events(MockAllEvents)
            .build_with_tokens();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider.clone())
                .service(get_all_events_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/events")
            .insert_header(("Authorization", user_bearer(&token_provider)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn store_failure_is_internal_error() {
        let (state, token_provider) = TestAppStateBuilder::default()
            .with_list_all_events(MockAllEventsFailing)
            .build_with_tokens();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider.clone())
                .service(get_all_events_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/events")
            .insert_header(("Authorization", admin_bearer(&token_provider)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
