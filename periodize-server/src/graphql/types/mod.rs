pub mod phase;
pub mod plan;
pub mod session;
pub mod user;
pub mod week;

pub use phase::*;
pub use plan::*;
pub use session::*;
pub use user::*;
pub use week::*;

use async_graphql::{Context, Result};
use periodize::repositories::Repository;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;

/// Resolve the `createdBy` relation shared by every owned entity
pub(crate) async fn load_creator(ctx: &Context<'_>, user_id: &str) -> Result<User> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .app()
        .users()
        .get(user_id)
        .await
        .map_err(StructuredError::from_core_error)?
        .ok_or_else(|| StructuredError::not_found("User", user_id))?;

    Ok(User::from(user))
}
