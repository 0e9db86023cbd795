use async_graphql::*;
use chrono::{DateTime, Utc};
use periodize::database::entities::phases;
use periodize::repositories::Repository;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{load_creator, Plan, User, Week};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Phase {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub plan_id: String,
    #[graphql(skip)]
    pub created_by_id: String,
}

impl From<phases::Model> for Phase {
    fn from(model: phases::Model) -> Self {
        Self {
            id: ID(model.id),
            title: model.title,
            description: model.description,
            order: model.sort_order,
            created_at: model.created_at,
            plan_id: model.plan_id,
            created_by_id: model.created_by_id,
        }
    }
}

#[ComplexObject]
impl Phase {
    async fn created_by(&self, ctx: &Context<'_>) -> Result<User> {
        load_creator(ctx, &self.created_by_id).await
    }

    async fn plan(&self, ctx: &Context<'_>) -> Result<Plan> {
        let context = ctx.data::<GraphQLContext>()?;
        let plan = context
            .app()
            .plans()
            .get(&self.plan_id)
            .await
            .map_err(StructuredError::from_core_error)?
            .ok_or_else(|| StructuredError::not_found("Plan", &self.plan_id))?;

        Ok(Plan::from(plan))
    }

    async fn weeks(&self, ctx: &Context<'_>) -> Result<Vec<Week>> {
        let context = ctx.data::<GraphQLContext>()?;
        let weeks = context
            .app()
            .weeks()
            .list_for_phase(&self.id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(weeks.into_iter().map(Week::from).collect())
    }
}
