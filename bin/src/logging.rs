//! Tracing setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Returns the filter directive for the verbosity flags.
pub(crate) const fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flags.
///
/// Logs go to stderr so reports on stdout stay machine-readable.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(0, false), "warn");
        assert_eq!(default_filter(2, false), "debug");
        assert_eq!(default_filter(9, false), "trace");
        assert_eq!(default_filter(3, true), "error");
    }
}
