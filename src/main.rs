use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gradebook_api::auth::TokenService;
use gradebook_api::config::config;
use gradebook_api::database::DatabaseManager;
use gradebook_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config();
    tracing::info!("Starting Gradebook API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)?;
    if config.database.run_migrations {
        DatabaseManager::migrate(&pool).await?;
    }

    let tokens = TokenService::from_config(&config.security).context("JWT_SECRET must be set")?;
    let router = app(AppState::new(pool, tokens), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Gradebook API listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
