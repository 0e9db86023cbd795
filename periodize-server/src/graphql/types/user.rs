use async_graphql::*;
use chrono::{DateTime, Utc};
use periodize::database::entities::users;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Plan;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: ID(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

#[ComplexObject]
impl User {
    async fn plans(&self, ctx: &Context<'_>) -> Result<Vec<Plan>> {
        let context = ctx.data::<GraphQLContext>()?;
        let plans = context
            .app()
            .plans()
            .list_for_user(&self.id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(plans.into_iter().map(Plan::from).collect())
    }
}

/// Token plus the user it was issued for
#[derive(SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

impl From<periodize::app_context::AuthSession> for AuthPayload {
    fn from(session: periodize::app_context::AuthSession) -> Self {
        Self {
            token: session.token,
            user: User::from(session.user),
        }
    }
}
