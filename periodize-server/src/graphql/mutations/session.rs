use async_graphql::*;
use periodize::app_context::CreateSession;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Session;

#[derive(Default)]
pub struct SessionMutation;

#[Object]
impl SessionMutation {
    /// Add a session to a week the caller owns; `order` becomes the session's day
    async fn create_session(
        &self,
        ctx: &Context<'_>,
        week_id: ID,
        title: String,
        description: Option<String>,
        purpose: Option<String>,
        order: i32,
    ) -> Result<Session> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.actor_for_request(ctx);
        let session = context
            .app()
            .create_session(
                &actor,
                CreateSession {
                    week_id: week_id.0,
                    title,
                    description,
                    purpose,
                    order,
                },
            )
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Session::from(session))
    }
}
