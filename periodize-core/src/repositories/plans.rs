use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{OwnedRepository, Repository};
use crate::database::entities::plans;
use crate::errors::CoreResult;

#[derive(Clone, Debug)]
pub struct NewPlan {
    pub title: String,
    pub created_by_id: String,
}

#[derive(Clone)]
pub struct PlanRepository {
    db: DatabaseConnection,
}

impl PlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_user(&self, user_id: &str) -> CoreResult<Vec<plans::Model>> {
        let plans = plans::Entity::find()
            .filter(plans::Column::CreatedById.eq(user_id))
            .order_by_asc(plans::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(plans)
    }
}

#[async_trait]
impl Repository for PlanRepository {
    type Model = plans::Model;
    type Draft = NewPlan;

    async fn get(&self, id: &str) -> CoreResult<Option<plans::Model>> {
        Ok(plans::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> CoreResult<Vec<plans::Model>> {
        let plans = plans::Entity::find()
            .order_by_asc(plans::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(plans)
    }

    async fn create(&self, draft: NewPlan) -> CoreResult<plans::Model> {
        let mut plan = plans::ActiveModel::new();
        plan.title = Set(draft.title);
        plan.created_by_id = Set(draft.created_by_id);

        Ok(plan.insert(&self.db).await?)
    }
}

#[async_trait]
impl OwnedRepository for PlanRepository {
    async fn exists_owned_by(&self, id: &str, user_id: &str) -> CoreResult<bool> {
        let count = plans::Entity::find()
            .filter(plans::Column::Id.eq(id))
            .filter(plans::Column::CreatedById.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
