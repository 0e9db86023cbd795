use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::AuthPayload;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Register a new user and return a session token
    async fn signup(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
        name: String,
    ) -> Result<AuthPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let session = context
            .app()
            .signup(email, password, name)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(AuthPayload::from(session))
    }

    /// Exchange email and password for a session token
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let session = context
            .app()
            .login(&email, &password)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(AuthPayload::from(session))
    }
}
