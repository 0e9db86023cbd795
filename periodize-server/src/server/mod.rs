pub mod app;
pub mod handlers;

use anyhow::Result;
use clap::Subcommand;
use periodize::database::{establish_connection, migrations::Migrator, setup_database};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::ServerConfig;

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum MigrateDirection {
    /// Apply pending migrations
    Up,
    /// Roll back applied migrations
    Down,
    /// Roll back everything, then apply again
    Fresh,
}

pub async fn start_server(config: ServerConfig) -> Result<()> {
    let db = establish_connection(&config.database_url).await?;

    setup_database(&db).await?;
    info!("Database migrations completed");

    let app = app::create_app(db, &config.token, config.cors_origin.as_deref()).await?;

    log_routes(config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes(port: u16) {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
    info!("Playground: http://localhost:{}/graphql", port);
}

pub async fn migrate_database(database_url: &str, direction: MigrateDirection) -> Result<()> {
    let db = establish_connection(database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
