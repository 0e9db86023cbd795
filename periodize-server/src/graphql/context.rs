use std::sync::Arc;

use periodize::auth::Actor;
use periodize::AppContext;

/// Application-wide data shared by every resolver
#[derive(Clone)]
pub struct GraphQLContext {
    pub app: Arc<AppContext>,
}

/// Data built once per HTTP request and attached to the GraphQL request
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub actor: Actor,
}

impl RequestContext {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

impl GraphQLContext {
    pub fn new(app: Arc<AppContext>) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// The actor for the current request; anonymous when no request context was attached
    pub fn actor_for_request(&self, ctx: &async_graphql::Context<'_>) -> Actor {
        ctx.data_opt::<RequestContext>()
            .map(|request| request.actor.clone())
            .unwrap_or_default()
    }
}
