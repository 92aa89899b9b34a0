use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, util::TryInitError, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Logs go to stderr so generated source on stdout stays clean.
pub fn setup_tracing(filter: Option<&str>) -> Result<(), TryInitError> {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    let layer = tracing_subscriber::fmt::Layer::new().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default())
        .with(layer)
        .try_init()
}
