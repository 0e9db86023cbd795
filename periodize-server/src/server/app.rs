use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use periodize::auth::TokenSettings;
use periodize::AppContext;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{graphql, health};
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<AppContext>,
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(
    db: DatabaseConnection,
    token_settings: &TokenSettings,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let app = Arc::new(AppContext::new(db, token_settings));
    let graphql_schema = build_schema(GraphQLContext::new(app.clone()));

    let state = AppState {
        app,
        graphql_schema,
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // GraphQL API & Playground
        .route(
            "/graphql",
            get(graphql::graphql_playground).post(graphql::graphql_handler),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
