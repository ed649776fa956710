//! Alumna - Poetic photo descriptions for an alumni network

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alumna::{
    api::{self, AppState},
    config::Config,
    services::PoetryService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alumna=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Alumna description service...");

    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!(
        default_styles = config.poetry.default_style_count,
        max_styles = config.poetry.max_style_count,
        "Configuration loaded"
    );

    let state = AppState::new(PoetryService::new(config.poetry.clone()));
    let app = api::build_router(state, &config.server.cors_origin)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
