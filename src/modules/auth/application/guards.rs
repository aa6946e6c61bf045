use crate::modules::auth::application::domain::entities::Identity;

/// Authorization failures. The distinction matters at the web boundary:
/// `Unauthenticated` sends the caller to login (401), `Forbidden` keeps an
/// authenticated caller out of admin surfaces (403).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    Unauthenticated,
    Forbidden,
}

impl std::fmt::Display for GuardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardError::Unauthenticated => write!(f, "Authentication required"),
            GuardError::Forbidden => write!(f, "Administrator access required"),
        }
    }
}

impl std::error::Error for GuardError {}

/// Passes through any authenticated identity.
pub fn require_authenticated(identity: Option<&Identity>) -> Result<&Identity, GuardError> {
    identity.ok_or(GuardError::Unauthenticated)
}

/// Passes through authenticated admins only.
pub fn require_admin(identity: Option<&Identity>) -> Result<&Identity, GuardError> {
    let identity = require_authenticated(identity)?;
    if !identity.role.is_admin() {
        return Err(GuardError::Forbidden);
    }
    Ok(identity)
}
