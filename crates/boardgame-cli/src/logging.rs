//! Logging setup
//!
//! Logs go to stderr so listings on stdout stay pipeable. By default only
//! warnings plus this binary's INFO events are shown; `--verbose` raises that
//! to INFO everywhere and DEBUG for the core and CLI crates. RUST_LOG
//! overrides both.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,boardgame_core=debug,boardgame_cli=debug"
    } else {
        "warn,boardgame_cli=info"
    }
}

pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        assert_eq!(default_filter(false), "warn,boardgame_cli=info");
        let verbose = default_filter(true);
        assert!(verbose.starts_with("info,"));
        assert!(verbose.contains("boardgame_core=debug"));
        assert!(verbose.contains("boardgame_cli=debug"));
        for filter in [default_filter(false), default_filter(true)] {
            assert!(filter.parse::<EnvFilter>().is_ok());
        }
    }
}
