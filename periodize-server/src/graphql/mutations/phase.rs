use async_graphql::*;
use periodize::app_context::CreatePhase;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Phase;

#[derive(Default)]
pub struct PhaseMutation;

#[Object]
impl PhaseMutation {
    /// Add a phase to a plan the caller owns
    async fn create_phase(
        &self,
        ctx: &Context<'_>,
        plan_id: ID,
        title: String,
        description: Option<String>,
        order: i32,
    ) -> Result<Phase> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.actor_for_request(ctx);
        let phase = context
            .app()
            .create_phase(
                &actor,
                CreatePhase {
                    plan_id: plan_id.0,
                    title,
                    description,
                    order,
                },
            )
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Phase::from(phase))
    }
}
