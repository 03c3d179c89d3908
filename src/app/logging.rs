//! stderr logging setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub(crate) const LOG_ENV_VAR: &str = "SIGNAL_LAMP_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Install the global subscriber. Safe to call once per process.
pub(crate) fn init(verbose: bool, color: bool) {
    let filter = build_filter(verbose, std::env::var(LOG_ENV_VAR).ok().as_deref());
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {e}");
    }
}

/// `-v` wins over the environment; a bad directive falls back to the default.
fn build_filter(verbose: bool, env_directive: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    match env_directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("warning: ignoring {LOG_ENV_VAR}={directive}: {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}
