use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

/// Startup-time admin seeding policy, resolved from the environment before
/// the server starts accepting requests.
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfig {
    /// Admin account created only when the user table is empty.
    pub env_admin: Option<(String, String)>,
    /// Opt-in development convenience: seed the well-known
    /// admin/admin123 account when no user named "admin" exists.
    pub seed_default_admin: bool,
}

impl BootstrapConfig {
    pub fn from_env() -> Self {
        let env_admin = match (
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some((username, password))
            }
            _ => None,
        };

        let seed_default_admin = std::env::var("SEED_DEFAULT_ADMIN")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            env_admin,
            seed_default_admin,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub struct SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    pub async fn execute(&self, config: &BootstrapConfig) -> Result<(), SeedAdminError> {
        if let Some((username, password)) = &config.env_admin {
            let count = self
                .query
                .count_users()
                .await
                .map_err(|e| SeedAdminError::QueryError(e.to_string()))?;

            if count == 0 {
                self.create_admin(username, password).await?;
                info!(username = %username, "Bootstrapped admin user from environment");
            }
        }

        if config.seed_default_admin {
            let existing = self
                .query
                .find_by_username("admin")
                .await
                .map_err(|e| SeedAdminError::QueryError(e.to_string()))?;

            if existing.is_none() {
                self.create_admin("admin", "admin123").await?;
                warn!(
                    "Seeded default admin account 'admin'/'admin123' (SEED_DEFAULT_ADMIN). \
                     Change this password immediately; never enable in production."
                );
            }
        }

        Ok(())
    }

    async fn create_admin(&self, username: &str, password: &str) -> Result<(), SeedAdminError> {
        let password_hash = self
            .password_hasher
            .hash_password(password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role: Role::Admin,
            created_at: chrono::Utc::now(),
        };

        match self.repository.create_user(user).await {
            Ok(_) => Ok(()),
            // A concurrent seeder got there first; the account exists,
            // which is all this cares about.
            Err(UserRepositoryError::UsernameTaken) => Ok(()),
            Err(e) => Err(SeedAdminError::RepositoryError(e.to_string())),
        }
    }
}
