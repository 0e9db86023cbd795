use tracing::{info, warn};

use super::AppContext;
use crate::auth::Actor;
use crate::database::entities::{phases, plans, sessions, weeks};
use crate::errors::{CoreError, CoreResult};
use crate::repositories::{NewPhase, NewPlan, NewSession, NewWeek, OwnedRepository, Repository};

#[derive(Clone, Debug)]
pub struct CreatePhase {
    pub plan_id: String,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Clone, Debug)]
pub struct CreateWeek {
    pub phase_id: String,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Clone, Debug)]
pub struct CreateSession {
    pub week_id: String,
    pub title: String,
    pub description: Option<String>,
    pub purpose: Option<String>,
    /// Stored as the session's day
    pub order: i32,
}

/// Fails unless `parent_id` exists in `repo` and was created by `user_id`.
///
/// The check and the following insert are separate statements; a parent
/// removed in between is not detected here.
async fn ensure_owned<R>(
    repo: &R,
    parent: &str,
    parent_id: &str,
    user_id: &str,
) -> CoreResult<()>
where
    R: OwnedRepository + ?Sized,
{
    if repo.exists_owned_by(parent_id, user_id).await? {
        return Ok(());
    }

    warn!(
        "Rejected nested create: {} {} is missing or not owned by {}",
        parent, parent_id, user_id
    );
    Err(CoreError::ownership_or_existence(
        parent,
        &format!("{}Id", parent),
        parent_id,
    ))
}

impl AppContext {
    // ----- Plan hierarchy ----------------------------------------------------
    pub async fn create_plan(&self, actor: &Actor, title: String) -> CoreResult<plans::Model> {
        let user_id = actor.require_user()?;
        let plan = self
            .plans
            .create(NewPlan {
                title,
                created_by_id: user_id.to_string(),
            })
            .await?;

        info!("Created plan {} for user {}", plan.id, user_id);
        Ok(plan)
    }

    pub async fn create_phase(
        &self,
        actor: &Actor,
        input: CreatePhase,
    ) -> CoreResult<phases::Model> {
        let user_id = actor.require_user()?;
        ensure_owned(&self.plans, "plan", &input.plan_id, user_id).await?;

        let phase = self
            .phases
            .create(NewPhase {
                plan_id: input.plan_id,
                title: input.title,
                description: input.description,
                order: input.order,
                created_by_id: user_id.to_string(),
            })
            .await?;

        info!("Created phase {} in plan {}", phase.id, phase.plan_id);
        Ok(phase)
    }

    pub async fn create_week(&self, actor: &Actor, input: CreateWeek) -> CoreResult<weeks::Model> {
        let user_id = actor.require_user()?;
        ensure_owned(&self.phases, "phase", &input.phase_id, user_id).await?;

        let week = self
            .weeks
            .create(NewWeek {
                phase_id: input.phase_id,
                title: input.title,
                description: input.description,
                order: input.order,
                created_by_id: user_id.to_string(),
            })
            .await?;

        info!("Created week {} in phase {}", week.id, week.phase_id);
        Ok(week)
    }

    pub async fn create_session(
        &self,
        actor: &Actor,
        input: CreateSession,
    ) -> CoreResult<sessions::Model> {
        let user_id = actor.require_user()?;
        ensure_owned(&self.weeks, "week", &input.week_id, user_id).await?;

        let session = self
            .sessions
            .create(NewSession {
                week_id: input.week_id,
                title: input.title,
                description: input.description,
                purpose: input.purpose,
                day: input.order,
                created_by_id: user_id.to_string(),
            })
            .await?;

        info!("Created session {} in week {}", session.id, session.week_id);
        Ok(session)
    }
}
