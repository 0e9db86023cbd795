use anyhow::Result;
use clap::{Parser, Subcommand};
use periodize::database::get_database_url;
use periodize_server::config::{ServerConfig, DEFAULT_PORT, DEFAULT_TOKEN_TTL_HOURS};
use periodize_server::server::{self, MigrateDirection};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    /// SQLite file path or full database URL
    #[clap(short, long, env = "DATABASE_URL", global = true)]
    database: Option<String>,
    /// Secret used to sign session tokens
    #[clap(long, env = "APP_SECRET", hide_env_values = true)]
    app_secret: Option<String>,
    #[clap(long, env = "TOKEN_TTL_HOURS", default_value_t = DEFAULT_TOKEN_TTL_HOURS)]
    token_ttl_hours: i64,
    #[clap(long, env = "CORS_ORIGIN")]
    cors_origin: Option<String>,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations without starting the server
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(&args.log_level);

    match args.command {
        Some(Command::Migrate { direction }) => {
            let database_url = get_database_url(args.database.as_deref());
            server::migrate_database(&database_url, direction).await?;
        }
        None => {
            let config = ServerConfig::from_parts(
                args.port,
                args.database.as_deref(),
                args.app_secret,
                args.token_ttl_hours,
                args.cors_origin,
            )?;

            info!("Starting server on port {}", config.port);
            server::start_server(config).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
