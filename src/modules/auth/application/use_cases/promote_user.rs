use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum PromoteError {
    UserNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for PromoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoteError::UserNotFound => write!(f, "User not found"),
            PromoteError::QueryError(msg) => write!(f, "Query error: {}", msg),
            PromoteError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PromoteError {}

#[async_trait]
pub trait IPromoteUserUseCase: Send + Sync {
    async fn execute(&self, target_username: &str) -> Result<(), PromoteError>;
}

/// One-directional role elevation. The admin gate runs at the web boundary;
/// by the time this executes the actor is known to be an admin.
#[derive(Clone)]
pub struct PromoteUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> PromoteUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IPromoteUserUseCase for PromoteUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, target_username: &str) -> Result<(), PromoteError> {
        let user = self
            .query
            .find_by_username(target_username)
            .await
            .map_err(|e| PromoteError::QueryError(e.to_string()))?
            .ok_or(PromoteError::UserNotFound)?;

        // Unconditional set keeps the operation idempotent: promoting an
        // admin again succeeds without touching anything meaningful.
        match self.repository.set_role(&user.username, Role::Admin).await {
            Ok(()) => Ok(()),
            Err(UserRepositoryError::UserNotFound) => Err(PromoteError::UserNotFound),
            Err(e) => Err(PromoteError::RepositoryError(e.to_string())),
        }
    }
}
