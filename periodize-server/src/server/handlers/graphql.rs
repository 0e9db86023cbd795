use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};

use crate::auth::request_actor;
use crate::graphql::RequestContext;
use crate::server::app::AppState;

pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

// The actor is resolved per request, before the schema runs.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let actor = request_actor(&state.app, &headers);
    let request = req.into_inner().data(RequestContext::new(actor));

    state.graphql_schema.execute(request).await.into()
}
