use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::{Identity, Role};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let config = JwtConfig {
        secret_key: "test_secret_key_at_least_32_chars_long!".to_string(),
        issuer: "eventboard-test".to_string(),
        session_token_expiry: 3600,
    };
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(JwtTokenService::new(config));
    web::Data::new(provider)
}

fn bearer_for(provider: &web::Data<Arc<dyn TokenProvider + Send + Sync>>, role: Role) -> String {
    let identity = Identity {
        user_id: Uuid::new_v4(),
        username: match role {
            Role::Admin => "test-admin".to_string(),
            Role::User => "test-user".to_string(),
        },
        role,
    };
    let token = provider
        .issue_session_token(&identity)
        .expect("test token issuance failed");
    format!("Bearer {token}")
}

pub fn admin_bearer(provider: &web::Data<Arc<dyn TokenProvider + Send + Sync>>) -> String {
    bearer_for(provider, Role::Admin)
}

pub fn user_bearer(provider: &web::Data<Arc<dyn TokenProvider + Send + Sync>>) -> String {
    bearer_for(provider, Role::User)
}
