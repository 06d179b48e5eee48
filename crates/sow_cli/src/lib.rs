#![forbid(unsafe_code)]
//! Command-line front end for `sow`: argument parsing, configuration, catalog files and
//! terminal/HTML rendering.
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod render;

use tracing_subscriber::EnvFilter;

/// Level used when neither the command line, the config file nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// Map a user-supplied level name to a tracing level.
///
/// Unknown names fall back to [`DEFAULT_LOG_LEVEL`] with a note on stderr, since logging is
/// not running yet.
pub fn parse_log_level(s: &str) -> tracing::Level {
    match s.trim().to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{s}', defaulting to WARN");
            DEFAULT_LOG_LEVEL
        }
    }
}

/// Install the stderr subscriber.
///
/// Priority: `cli_level` > `config_level` > `RUST_LOG` > [`DEFAULT_LOG_LEVEL`].
pub fn init_tracing(cli_level: Option<&str>, config_level: Option<&str>) {
    let filter = match cli_level.or(config_level) {
        Some(s) => EnvFilter::default().add_directive(parse_log_level(s).into()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(DEFAULT_LOG_LEVEL.into())),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
