//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::EnvFilter;

/// Filter used with `--debug` when `RUST_LOG` is not set.
pub const DEBUG_FILTER: &str = "polyglot_cli=debug";

/// Filter used otherwise when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: `RUST_LOG` wins, then the debug flag.
pub fn filter_directive(rust_log: Option<&str>, debug: bool) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if debug => DEBUG_FILTER.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(debug: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::try_new(filter_directive(rust_log.as_deref(), debug))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
