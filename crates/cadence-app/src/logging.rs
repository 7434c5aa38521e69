use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["cadence", "cadence_app", "cadence_core", "cadence_rule"];

/// Level selected by `-v` flags, if any were given.
///
/// - 1 (-v)    -> info
/// - 2 (-vv)   -> debug
/// - 3+ (-vvv) -> trace
#[must_use]
pub const fn verbosity_level(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Filter directives applying `level` to every workspace crate.
#[must_use]
pub fn directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Picks the filter: `-v` flags first, then `RUST_LOG`, then the configured
/// level. An unparsable configured level falls back to `warn`.
#[must_use]
pub fn filter(verbosity: u8, configured_level: &str) -> EnvFilter {
    if let Some(level) = verbosity_level(verbosity) {
        return EnvFilter::new(directives(level));
    }

    EnvFilter::try_from_default_env()
        .or_else(|_e| EnvFilter::try_new(directives(configured_level)))
        .unwrap_or_else(|_e| EnvFilter::new(directives("warn")))
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// results.
pub fn init(verbosity: u8, configured_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity, configured_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
