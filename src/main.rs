use hangman::{app, AppState, GameService, ServerConfig};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hangman=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    info!("Starting hangman game server");

    // One game and roster for the whole process
    let app_state = AppState::new(Arc::new(GameService::new()));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(bind = %config.bind, "Server running");
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
