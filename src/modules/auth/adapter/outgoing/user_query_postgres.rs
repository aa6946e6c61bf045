use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_user(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        // Rows predating the role column default carry whatever text is
        // there; anything unrecognized reads as a plain user.
        role: Role::parse_or_user(&model.role),
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map(|opt| opt.map(model_to_user))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map(|opt| opt.map(model_to_user))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        UserEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(model_to_user).collect())
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn count_users(&self) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
