use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{OwnedRepository, Repository};
use crate::database::entities::sessions;
use crate::errors::CoreResult;

#[derive(Clone, Debug)]
pub struct NewSession {
    pub week_id: String,
    pub title: String,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub day: i32,
    pub created_by_id: String,
}

#[derive(Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_week(&self, week_id: &str) -> CoreResult<Vec<sessions::Model>> {
        let sessions = sessions::Entity::find()
            .filter(sessions::Column::WeekId.eq(week_id))
            .order_by_asc(sessions::Column::Day)
            .order_by_asc(sessions::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(sessions)
    }
}

#[async_trait]
impl Repository for SessionRepository {
    type Model = sessions::Model;
    type Draft = NewSession;

    async fn get(&self, id: &str) -> CoreResult<Option<sessions::Model>> {
        Ok(sessions::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> CoreResult<Vec<sessions::Model>> {
        let sessions = sessions::Entity::find()
            .order_by_asc(sessions::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(sessions)
    }

    async fn create(&self, draft: NewSession) -> CoreResult<sessions::Model> {
        let mut session = sessions::ActiveModel::new();
        session.title = Set(draft.title);
        session.description = Set(draft.description);
        session.purpose = Set(draft.purpose);
        session.day = Set(draft.day);
        session.week_id = Set(draft.week_id);
        session.created_by_id = Set(draft.created_by_id);

        Ok(session.insert(&self.db).await?)
    }
}

#[async_trait]
impl OwnedRepository for SessionRepository {
    async fn exists_owned_by(&self, id: &str, user_id: &str) -> CoreResult<bool> {
        let count = sessions::Entity::find()
            .filter(sessions::Column::Id.eq(id))
            .filter(sessions::Column::CreatedById.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
