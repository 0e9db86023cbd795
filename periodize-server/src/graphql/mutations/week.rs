use async_graphql::*;
use periodize::app_context::CreateWeek;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Week;

#[derive(Default)]
pub struct WeekMutation;

#[Object]
impl WeekMutation {
    /// Add a week to a phase the caller owns
    async fn create_week(
        &self,
        ctx: &Context<'_>,
        phase_id: ID,
        title: String,
        description: Option<String>,
        order: i32,
    ) -> Result<Week> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.actor_for_request(ctx);
        let week = context
            .app()
            .create_week(
                &actor,
                CreateWeek {
                    phase_id: phase_id.0,
                    title,
                    description,
                    order,
                },
            )
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Week::from(week))
    }
}
