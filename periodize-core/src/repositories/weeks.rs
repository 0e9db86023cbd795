use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{OwnedRepository, Repository};
use crate::database::entities::weeks;
use crate::errors::CoreResult;

#[derive(Clone, Debug)]
pub struct NewWeek {
    pub phase_id: String,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_by_id: String,
}

#[derive(Clone)]
pub struct WeekRepository {
    db: DatabaseConnection,
}

impl WeekRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_phase(&self, phase_id: &str) -> CoreResult<Vec<weeks::Model>> {
        let weeks = weeks::Entity::find()
            .filter(weeks::Column::PhaseId.eq(phase_id))
            .order_by_asc(weeks::Column::SortOrder)
            .order_by_asc(weeks::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(weeks)
    }
}

#[async_trait]
impl Repository for WeekRepository {
    type Model = weeks::Model;
    type Draft = NewWeek;

    async fn get(&self, id: &str) -> CoreResult<Option<weeks::Model>> {
        Ok(weeks::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> CoreResult<Vec<weeks::Model>> {
        let weeks = weeks::Entity::find()
            .order_by_asc(weeks::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(weeks)
    }

    async fn create(&self, draft: NewWeek) -> CoreResult<weeks::Model> {
        let mut week = weeks::ActiveModel::new();
        week.title = Set(draft.title);
        week.description = Set(draft.description);
        week.sort_order = Set(draft.order);
        week.phase_id = Set(draft.phase_id);
        week.created_by_id = Set(draft.created_by_id);

        Ok(week.insert(&self.db).await?)
    }
}

#[async_trait]
impl OwnedRepository for WeekRepository {
    async fn exists_owned_by(&self, id: &str, user_id: &str) -> CoreResult<bool> {
        let count = weeks::Entity::find()
            .filter(weeks::Column::Id.eq(id))
            .filter(weeks::Column::CreatedById.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
