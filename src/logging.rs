use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over the
/// default `warn`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
