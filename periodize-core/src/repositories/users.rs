use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::Repository;
use crate::database::entities::users;
use crate::errors::CoreResult;

#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> CoreResult<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl Repository for UserRepository {
    type Model = users::Model;
    type Draft = NewUser;

    async fn get(&self, id: &str) -> CoreResult<Option<users::Model>> {
        Ok(users::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> CoreResult<Vec<users::Model>> {
        let users = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(users)
    }

    async fn create(&self, draft: NewUser) -> CoreResult<users::Model> {
        let mut user = users::ActiveModel::new();
        user.email = Set(draft.email);
        user.name = Set(draft.name);
        user.password_hash = Set(draft.password_hash);

        Ok(user.insert(&self.db).await?)
    }
}
