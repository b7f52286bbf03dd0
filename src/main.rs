use tracing_subscriber::EnvFilter;

use ragie_qa::api;
use ragie_qa::config::Config;
use ragie_qa::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; secrets may come from the environment or secrets.toml.
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            return Err(e.into());
        }
    };
    match config.retrieval.timeout_secs {
        Some(secs) => tracing::info!("Retrieval timeout: {secs}s"),
        None => tracing::info!("Retrieval timeout: client default"),
    }

    let state = AppState::new(config.clone())?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
