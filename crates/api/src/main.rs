use mhwsync_api::config::AppConfig;
use mhwsync_api::routes::create_router;
use mhwsync_api::server::{Server, shutdown_signal};
use mhwsync_api::state::AppState;
use mhwsync_domain::Tracker;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("mhwsync - Starting Server");

    let config = AppConfig::from_env()
        .inspect_err(|error| tracing::error!(%error, "Invalid configuration"))?;

    let tracker = Tracker::with_buffer_size(config.tracker.buffer_size);
    tracing::info!(
        buffer_size = tracker.registry().buffer_size(),
        "Session tracker initialized"
    );

    let server = Server::bind(&config.server).await?;
    let router = create_router(AppState::new(tracker));

    server.serve(router, shutdown_signal()).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mhwsync_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}
