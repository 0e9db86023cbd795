use async_graphql::*;
use chrono::{DateTime, Utc};
use periodize::database::entities::sessions;
use periodize::repositories::Repository;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{load_creator, User, Week};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Session {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub day: i32,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub week_id: String,
    #[graphql(skip)]
    pub created_by_id: String,
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: ID(model.id),
            title: model.title,
            description: model.description,
            purpose: model.purpose,
            day: model.day,
            created_at: model.created_at,
            week_id: model.week_id,
            created_by_id: model.created_by_id,
        }
    }
}

#[ComplexObject]
impl Session {
    async fn created_by(&self, ctx: &Context<'_>) -> Result<User> {
        load_creator(ctx, &self.created_by_id).await
    }

    async fn week(&self, ctx: &Context<'_>) -> Result<Week> {
        let context = ctx.data::<GraphQLContext>()?;
        let week = context
            .app()
            .weeks()
            .get(&self.week_id)
            .await
            .map_err(StructuredError::from_core_error)?
            .ok_or_else(|| StructuredError::not_found("Week", &self.week_id))?;

        Ok(Week::from(week))
    }
}
