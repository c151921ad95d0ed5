use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
