use studyhub::{shell, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyhub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ITBA Study Hub");

    let config = Config::load().expect("Failed to load configuration");
    tracing::info!("Configuration loaded, state file: {}", config.data_file);

    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");

    if let Err(e) = shell::run(state).await {
        tracing::error!("Shell exited with error: {:#}", e);
        std::process::exit(1);
    }
}
