use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays parseable. `RUST_LOG` overrides the default `warn` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
