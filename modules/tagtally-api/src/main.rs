use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use extractor_client::ExtractorClient;
use tagtally_common::Config;

use tagtally_api::routes::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tagtally_api=info".parse()?))
        .init();

    let config = Config::from_env();
    let extractor = Arc::new(ExtractorClient::new(config.extractor_url.clone()));

    let addr = format!("{}:{}", config.web_host, config.web_port);
    let state = Arc::new(AppState { config, extractor });
    let app = build_router(state);

    info!("Tagtally server starting on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
