use chat_relay_service::config::RelayConfig;
use chat_relay_service::startup::Application;
use dotenvy::dotenv;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("chat-relay-service", &config.common.log_level);

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Chat relay listening on port {}", app.port());

    app.run_until_stopped().await
}
