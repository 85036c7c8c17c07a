//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Pick the tracing filter.
///
/// `RUST_LOG` wins, then the `-v` count, then the configured filter.
fn resolve_filter(env: Option<String>, verbosity: u8, configured: &str) -> String {
    if let Some(env) = env.filter(|v| !v.trim().is_empty()) {
        return env;
    }

    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only ever
/// carries the display.
pub fn init_logging(verbosity: u8, configured: &str) {
    let directive = resolve_filter(std::env::var("RUST_LOG").ok(), verbosity, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
