use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive for a CLI verbosity count.
///
/// Mapping:
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// Returns `None` for 0 so the configured level applies.
pub fn level_for_verbosity(verbosity: u8) -> Option<String> {
    let level = match verbosity {
        0 => return None,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Some(format!("warn,period_calculator={level}"))
}

/// Initialize tracing from the logging configuration.
///
/// `RUST_LOG` env var overrides the configured level if set. Output goes to
/// stderr so command output on stdout stays machine-readable.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding); keep it.
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = result {
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
}
