use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum RegisterError {
    EmptyUsername,
    EmptyPassword,
    UsernameTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::EmptyUsername => write!(f, "Username cannot be empty"),
            RegisterError::EmptyPassword => write!(f, "Password cannot be empty"),
            RegisterError::UsernameTaken => write!(f, "Username already taken"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, username: String, password: String) -> Result<User, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: String, password: String) -> Result<User, RegisterError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(RegisterError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(RegisterError::EmptyPassword);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            username,
            password_hash,
            // Registration always yields a plain user; only promotion
            // elevates the role.
            role: Role::User,
            created_at: chrono::Utc::now(),
        };

        // No existence pre-check: the unique constraint is the arbiter, so
        // a concurrent duplicate still surfaces as UsernameTaken.
        match self.repository.create_user(user).await {
            Ok(user) => Ok(user),
            Err(UserRepositoryError::UsernameTaken) => Err(RegisterError::UsernameTaken),
            Err(e) => Err(RegisterError::RepositoryError(e.to_string())),
        }
    }
}
