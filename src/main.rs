use markbook::{config::Config, state::AppState};
use markbook_client::RecordFetcher;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting report service...");

    let config = Config::load()?;
    let credentials = config.auth.credentials()?;
    let fetcher = RecordFetcher::new(
        config.backend.base_url.clone(),
        Duration::from_secs(config.backend.timeout_secs),
    )?;
    tracing::info!(
        "Configuration loaded (backend: {}, auth mode: {:?})",
        config.backend.base_url,
        config.auth.mode
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(fetcher, credentials, config);
    let app = markbook::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Report service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /api/v1/records/:id/report");
    tracing::info!("  - GET /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,markbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
