use sea_orm::DatabaseConnection;

use crate::auth::{TokenService, TokenSettings};
use crate::repositories::{
    PhaseRepository, PlanRepository, SessionRepository, UserRepository, WeekRepository,
};

mod auth_operations;
mod planning_operations;

pub use auth_operations::AuthSession;
pub use planning_operations::{CreatePhase, CreateSession, CreateWeek};

/// Shared application context exposing repositories and the token service to the API layer.
#[derive(Clone)]
pub struct AppContext {
    tokens: TokenService,
    users: UserRepository,
    plans: PlanRepository,
    phases: PhaseRepository,
    weeks: WeekRepository,
    sessions: SessionRepository,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, token_settings: &TokenSettings) -> Self {
        Self {
            tokens: TokenService::new(token_settings),
            users: UserRepository::new(db.clone()),
            plans: PlanRepository::new(db.clone()),
            phases: PhaseRepository::new(db.clone()),
            weeks: WeekRepository::new(db.clone()),
            sessions: SessionRepository::new(db),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn plans(&self) -> &PlanRepository {
        &self.plans
    }

    pub fn phases(&self) -> &PhaseRepository {
        &self.phases
    }

    pub fn weeks(&self) -> &WeekRepository {
        &self.weeks
    }

    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Duration;

    use super::AppContext;
    use crate::auth::{Actor, TokenSettings};
    use crate::database::test_utils::setup_test_db;

    pub async fn test_app() -> AppContext {
        let db = setup_test_db().await;
        AppContext::new(db, &TokenSettings::new("test-secret", Duration::hours(1)))
    }

    pub async fn signed_up(app: &AppContext, email: &str) -> Actor {
        let session = app
            .signup(email.to_string(), "pw".to_string(), "Test User".to_string())
            .await
            .expect("signup");
        Actor::user(session.user.id)
    }
}
