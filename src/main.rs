mod api;
mod config;
mod error;
mod metrics;
mod model;
mod service;
mod upstream;

use api::AppState;
use config::AppConfig;
use metrics::Metrics;
use service::ZomatoService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use upstream::ZomatoClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = AppConfig::from_env()?;

    let metrics = Metrics::new()?;
    let client = ZomatoClient::try_new(cfg.upstream.clone())?;
    let zomato = ZomatoService::new(client, metrics.clone());

    let app = api::router(AppState { zomato, metrics })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listen_addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;

    tracing::info!(%listen_addr, "starting menugate gateway");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("menugate exited cleanly");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term_signal) => term_signal.recv().await,
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                None
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
