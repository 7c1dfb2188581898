use tracing::Subscriber;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_log::LogTracer;
use tracing_log::log::SetLoggerError;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to set logger: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("failed to set subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Build a subscriber writing to stderr. `RUST_LOG` takes precedence over
/// `env_filter` when set.
pub fn get_subscriber(env_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_line_number(true);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default, and route `log` records to it.
///
/// Fails if either has already been set.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> Result<(), TelemetryError> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
