//! Logger bootstrap shared by the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` does not say otherwise.
///
/// Verbose runs include the per-frame motion reports logged at debug level.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// Returns `false` when a logger was already installed, which lets tests call
/// this repeatedly without panicking.
pub fn init(verbose: bool) -> bool {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
