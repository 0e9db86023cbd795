use async_graphql::*;
use periodize::repositories::Repository;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{Phase, Plan, Session, User, Week};

/// Read side of the API.
///
/// The list fields return every record of every user and do not consult the
/// request's actor.
pub struct Query;

#[Object]
impl Query {
    /// All plans
    async fn plans(&self, ctx: &Context<'_>) -> Result<Vec<Plan>> {
        let context = ctx.data::<GraphQLContext>()?;
        let plans = context
            .app()
            .plans()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(plans.into_iter().map(Plan::from).collect())
    }

    /// All phases
    async fn phases(&self, ctx: &Context<'_>) -> Result<Vec<Phase>> {
        let context = ctx.data::<GraphQLContext>()?;
        let phases = context
            .app()
            .phases()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(phases.into_iter().map(Phase::from).collect())
    }

    /// All weeks
    async fn weeks(&self, ctx: &Context<'_>) -> Result<Vec<Week>> {
        let context = ctx.data::<GraphQLContext>()?;
        let weeks = context
            .app()
            .weeks()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(weeks.into_iter().map(Week::from).collect())
    }

    /// All sessions
    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        let context = ctx.data::<GraphQLContext>()?;
        let sessions = context
            .app()
            .sessions()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(sessions.into_iter().map(Session::from).collect())
    }

    async fn plan(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Plan>> {
        let context = ctx.data::<GraphQLContext>()?;
        let plan = context
            .app()
            .plans()
            .get(&id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(plan.map(Plan::from))
    }

    async fn phase(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Phase>> {
        let context = ctx.data::<GraphQLContext>()?;
        let phase = context
            .app()
            .phases()
            .get(&id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(phase.map(Phase::from))
    }

    async fn week(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Week>> {
        let context = ctx.data::<GraphQLContext>()?;
        let week = context
            .app()
            .weeks()
            .get(&id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(week.map(Week::from))
    }

    async fn session(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Session>> {
        let context = ctx.data::<GraphQLContext>()?;
        let session = context
            .app()
            .sessions()
            .get(&id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(session.map(Session::from))
    }

    /// The authenticated user
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context.actor_for_request(ctx);
        let user = context
            .app()
            .current_user(&actor)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(User::from(user))
    }
}
