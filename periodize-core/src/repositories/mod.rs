//! Typed per-entity access to the store.
//!
//! Every entity gets a repository with `get`, `list` and `create`. Entities
//! that record their creator also implement [`OwnedRepository`], which backs
//! the ownership check run before nested creates.

use async_trait::async_trait;

use crate::errors::CoreResult;

pub mod phases;
pub mod plans;
pub mod sessions;
pub mod users;
pub mod weeks;

pub use phases::{NewPhase, PhaseRepository};
pub use plans::{NewPlan, PlanRepository};
pub use sessions::{NewSession, SessionRepository};
pub use users::{NewUser, UserRepository};
pub use weeks::{NewWeek, WeekRepository};

#[async_trait]
pub trait Repository: Send + Sync {
    type Model: Send + Sync;
    type Draft: Send;

    async fn get(&self, id: &str) -> CoreResult<Option<Self::Model>>;

    /// Every record, oldest first
    async fn list(&self) -> CoreResult<Vec<Self::Model>>;

    async fn create(&self, draft: Self::Draft) -> CoreResult<Self::Model>;
}

#[async_trait]
pub trait OwnedRepository: Repository {
    /// True when a record with `id` exists and was created by `user_id`
    async fn exists_owned_by(&self, id: &str, user_id: &str) -> CoreResult<bool>;
}
