use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::Identity;
use crate::modules::auth::application::ports::outgoing::TokenProvider;

/// The caller's identity, if any. Extraction never fails: a missing,
/// malformed, expired or wrong-type token all read as anonymous, and the
/// guards decide per-route whether anonymous is acceptable.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl MaybeIdentity {
    pub fn as_ref(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeIdentity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(provider) => provider,
            None => return ready(Ok(MaybeIdentity(None))),
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => return ready(Ok(MaybeIdentity(None))),
        };

        match provider.verify_token(&token) {
            Ok(claims) if claims.token_type == "session" => {
                ready(Ok(MaybeIdentity(Some(claims.identity()))))
            }
            Ok(_) | Err(_) => ready(Ok(MaybeIdentity(None))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
