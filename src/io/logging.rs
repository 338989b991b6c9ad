//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Build the filter, preferring `RUST_LOG` over the default directive
pub fn env_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install a formatting subscriber writing to stderr
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
