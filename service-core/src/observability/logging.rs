use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber: RUST_LOG-driven filtering with a
/// JSON fmt layer carrying file/line context.
pub fn init_tracing(service_name: &str, log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();

    tracing::info!(service = service_name, "Tracing initialized");
}
