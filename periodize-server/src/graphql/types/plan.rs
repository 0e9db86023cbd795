use async_graphql::*;
use chrono::{DateTime, Utc};
use periodize::database::entities::plans;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{load_creator, Phase, User};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Plan {
    pub id: ID,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub created_by_id: String,
}

impl From<plans::Model> for Plan {
    fn from(model: plans::Model) -> Self {
        Self {
            id: ID(model.id),
            title: model.title,
            created_at: model.created_at,
            created_by_id: model.created_by_id,
        }
    }
}

#[ComplexObject]
impl Plan {
    async fn created_by(&self, ctx: &Context<'_>) -> Result<User> {
        load_creator(ctx, &self.created_by_id).await
    }

    /// Phases in their declared order
    async fn phases(&self, ctx: &Context<'_>) -> Result<Vec<Phase>> {
        let context = ctx.data::<GraphQLContext>()?;
        let phases = context
            .app()
            .phases()
            .list_for_plan(&self.id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(phases.into_iter().map(Phase::from).collect())
    }
}
