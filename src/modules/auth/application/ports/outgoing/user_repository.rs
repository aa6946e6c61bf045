use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::{Role, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Username uniqueness is enforced by the store's
    /// unique constraint, not by a prior read, so concurrent registrations
    /// of the same name cannot both succeed.
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Set the target's role unconditionally. Setting the role a user
    /// already has is a no-op success.
    async fn set_role(&self, username: &str, role: Role) -> Result<(), UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UsernameTaken,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UsernameTaken => write!(f, "Username already taken"),
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
