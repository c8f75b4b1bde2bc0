//! Logging setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` always wins; otherwise the level follows the `-v` count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity count
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber; later calls are no-ops
pub fn setup_logging(verbosity: u8) {
    let filter = filter_for(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(1), "info");
        assert_eq!(filter_for(2), "debug");
        assert_eq!(filter_for(9), "trace");
    }

    #[test]
    fn setup_twice_does_not_panic() {
        setup_logging(0);
        setup_logging(1);
    }
}
