// Mutations grouped by the entity they create

mod auth;
mod phase;
mod plan;
mod session;
mod week;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub auth::AuthMutation,
    pub plan::PlanMutation,
    pub phase::PhaseMutation,
    pub week::WeekMutation,
    pub session::SessionMutation,
);
