pub mod modules;
pub use modules::auth;
pub use modules::event;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    promote_user::{IPromoteUserUseCase, PromoteUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    seed_admin::{BootstrapConfig, SeedAdminUseCase},
};

use crate::event::adapter::outgoing::{EventQueryPostgres, EventRepositoryPostgres};
use crate::event::application::use_cases::{
    create_event::{CreateEventUseCase, ICreateEventUseCase},
    delete_event::{DeleteEventUseCase, IDeleteEventUseCase},
    list_all_events::{IListAllEventsUseCase, ListAllEventsUseCase},
    list_events::{IListEventsUseCase, ListEventsUseCase},
};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub promote_user_use_case: Arc<dyn IPromoteUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub create_event_use_case: Arc<dyn ICreateEventUseCase + Send + Sync>,
    pub list_events_use_case: Arc<dyn IListEventsUseCase + Send + Sync>,
    pub list_all_events_use_case: Arc<dyn IListAllEventsUseCase + Send + Sync>,
    pub delete_event_use_case: Arc<dyn IDeleteEventUseCase + Send + Sync>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting eventboard...");

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());

    let argon2_password_hasher = Argon2Hasher::from_env();
    let hasher_arc = Arc::new(argon2_password_hasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_query = EventQueryPostgres::new(Arc::clone(&db_arc));

    // Bootstrap admin accounts before taking traffic. A failure here is
    // logged, not fatal: the API is still usable for existing accounts.
    let seed_admin =
        SeedAdminUseCase::new(user_query.clone(), user_repo.clone(), hasher_arc.clone());
    if let Err(e) = seed_admin.execute(&BootstrapConfig::from_env()).await {
        warn!(error = %e, "Admin bootstrap failed");
    }

    let register_user_use_case =
        RegisterUserUseCase::new(user_repo.clone(), hasher_arc.clone());
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        hasher_arc,
        Arc::new(jwt_service.clone()),
    );
    let promote_user_use_case = PromoteUserUseCase::new(user_query.clone(), user_repo);
    let list_users_use_case = ListUsersUseCase::new(user_query);

    let create_event_use_case = CreateEventUseCase::new(event_repo.clone());
    let list_events_use_case = ListEventsUseCase::new(event_query.clone());
    let list_all_events_use_case = ListAllEventsUseCase::new(event_query);
    let delete_event_use_case = DeleteEventUseCase::new(event_repo);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        promote_user_use_case: Arc::new(promote_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        create_event_use_case: Arc::new(create_event_use_case),
        list_events_use_case: Arc::new(list_events_use_case),
        list_all_events_use_case: Arc::new(list_all_events_use_case),
        delete_event_use_case: Arc::new(delete_event_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server running on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Events
    cfg.service(crate::event::adapter::incoming::web::routes::get_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::create_event_handler);
    // Admin
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::promote_user_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_all_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::delete_event_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
