pub mod context;
pub mod errors;
pub mod mutations;
pub mod queries;
pub mod types;

pub use context::{GraphQLContext, RequestContext};

use async_graphql::{EmptySubscription, Schema};

pub type GraphQLSchema = Schema<queries::Query, mutations::Mutation, EmptySubscription>;

pub fn build_schema(context: GraphQLContext) -> GraphQLSchema {
    Schema::build(
        queries::Query,
        mutations::Mutation::default(),
        EmptySubscription,
    )
    .data(context)
    .finish()
}
