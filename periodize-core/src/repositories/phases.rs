use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{OwnedRepository, Repository};
use crate::database::entities::phases;
use crate::errors::CoreResult;

#[derive(Clone, Debug)]
pub struct NewPhase {
    pub plan_id: String,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_by_id: String,
}

#[derive(Clone)]
pub struct PhaseRepository {
    db: DatabaseConnection,
}

impl PhaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Phases of a plan in their declared order
    pub async fn list_for_plan(&self, plan_id: &str) -> CoreResult<Vec<phases::Model>> {
        let phases = phases::Entity::find()
            .filter(phases::Column::PlanId.eq(plan_id))
            .order_by_asc(phases::Column::SortOrder)
            .order_by_asc(phases::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(phases)
    }
}

#[async_trait]
impl Repository for PhaseRepository {
    type Model = phases::Model;
    type Draft = NewPhase;

    async fn get(&self, id: &str) -> CoreResult<Option<phases::Model>> {
        Ok(phases::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> CoreResult<Vec<phases::Model>> {
        let phases = phases::Entity::find()
            .order_by_asc(phases::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(phases)
    }

    async fn create(&self, draft: NewPhase) -> CoreResult<phases::Model> {
        let mut phase = phases::ActiveModel::new();
        phase.title = Set(draft.title);
        phase.description = Set(draft.description);
        phase.sort_order = Set(draft.order);
        phase.plan_id = Set(draft.plan_id);
        phase.created_by_id = Set(draft.created_by_id);

        Ok(phase.insert(&self.db).await?)
    }
}

#[async_trait]
impl OwnedRepository for PhaseRepository {
    async fn exists_owned_by(&self, id: &str, user_id: &str) -> CoreResult<bool> {
        let count = phases::Entity::find()
            .filter(phases::Column::Id.eq(id))
            .filter(phases::Column::CreatedById.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
