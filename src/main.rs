// meta ads strategy api

use adstrategist::config::Config;
use adstrategist::routes::build_router;
use adstrategist::StrategyService;
use anyhow::Context;
use shuttle_axum::ShuttleAxum;
use shuttle_runtime::SecretStore;
use tracing::info;

// shuttle entry point
#[shuttle_runtime::main]
async fn axum(#[shuttle_runtime::Secrets] secret_store: SecretStore) -> ShuttleAxum {
    info!("Starting Meta Ads Strategy API v1.0");

    // secrets first, then the process environment
    let config = Config::from_lookup(|key| {
        secret_store
            .get(key)
            .or_else(|| std::env::var(key).ok())
    });

    let service =
        StrategyService::from_config(&config).context("Failed to build strategy service")?;
    info!(
        mode = %service.mode(),
        timeout_secs = config.timeout.as_secs(),
        "Strategy service ready"
    );

    let router = build_router(service);
    Ok(router.into())
}
