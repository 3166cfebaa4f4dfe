use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// `level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Leaves any subscriber that is already installed in place.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
