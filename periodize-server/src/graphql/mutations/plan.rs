use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Plan;

#[derive(Default)]
pub struct PlanMutation;

#[Object]
impl PlanMutation {
    /// Create a plan owned by the caller
    async fn create_plan(&self, ctx: &Context<'_>, title: String) -> Result<Plan> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.actor_for_request(ctx);
        let plan = context
            .app()
            .create_plan(&actor, title)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Plan::from(plan))
    }
}
