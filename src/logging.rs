use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn,keyed_sort_research=info";

/// Installs the global subscriber. Logs go to stderr, stdout is reserved for results.
///
/// `RUST_LOG` overrides the default filter, `verbose` raises this crate to `debug`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,keyed_sort_research=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
