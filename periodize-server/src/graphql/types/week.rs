use async_graphql::*;
use chrono::{DateTime, Utc};
use periodize::database::entities::weeks;
use periodize::repositories::Repository;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{load_creator, Phase, Session, User};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Week {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub phase_id: String,
    #[graphql(skip)]
    pub created_by_id: String,
}

impl From<weeks::Model> for Week {
    fn from(model: weeks::Model) -> Self {
        Self {
            id: ID(model.id),
            title: model.title,
            description: model.description,
            order: model.sort_order,
            created_at: model.created_at,
            phase_id: model.phase_id,
            created_by_id: model.created_by_id,
        }
    }
}

#[ComplexObject]
impl Week {
    async fn created_by(&self, ctx: &Context<'_>) -> Result<User> {
        load_creator(ctx, &self.created_by_id).await
    }

    async fn phase(&self, ctx: &Context<'_>) -> Result<Phase> {
        let context = ctx.data::<GraphQLContext>()?;
        let phase = context
            .app()
            .phases()
            .get(&self.phase_id)
            .await
            .map_err(StructuredError::from_core_error)?
            .ok_or_else(|| StructuredError::not_found("Phase", &self.phase_id))?;

        Ok(Phase::from(phase))
    }

    /// Sessions ordered by day
    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        let context = ctx.data::<GraphQLContext>()?;
        let sessions = context
            .app()
            .sessions()
            .list_for_week(&self.id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(sessions.into_iter().map(Session::from).collect())
    }
}
