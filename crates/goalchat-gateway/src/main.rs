use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use goalchat_gateway::config::GatewayConfig;
use goalchat_gateway::state::AppState;
use goalchat_llm::azure::AzureOpenAiClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = GatewayConfig::from_env()?;

    let state = AppState {
        completion: Arc::new(AzureOpenAiClient::new(config.azure.clone())),
    };
    let app = goalchat_gateway::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        model = %config.azure.model,
        deployment = %config.azure.deployment,
        "gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
