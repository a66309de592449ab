//! Logging setup using `tracing`.
//!
//! Logs go to stderr so they never interleave with the result listings.
//! `RUST_LOG` wins over the verbosity flags when it is set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for the given verbosity flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "warn,portsweep=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
