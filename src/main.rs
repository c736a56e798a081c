use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use genre_compass::{
    api::{create_router, AppState},
    config::Config,
    models::GenreCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Catalog and hierarchy are built once and shared read-only
    let catalog = GenreCatalog::load(&config.catalog_path)
        .with_context(|| format!("Failed to load genre catalog from {}", config.catalog_path))?;
    let state = AppState::new(catalog, &config).context("Failed to initialize application state")?;

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
