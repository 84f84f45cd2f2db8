//! Structured logging for the biome calculator.
//!
//! Console output via `tracing_subscriber::fmt`, plus JSON file logging in
//! debug builds. The level comes from `RUST_LOG` when set, otherwise from
//! the config's `debug.log_level`.

use std::fs::File;
use std::path::Path;

use biomecalc_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "biomecalc.log";

const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Optional directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration to use for log level override
///
/// # Examples
///
/// ```no_run
/// use biomecalc_config::Config;
/// use biomecalc_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let log_file = if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = File::create(log_dir.join(LOG_FILE_NAME))
    {
        Some(log_file)
    } else {
        None
    };

    build_subscriber(env_filter, log_file).init();
}

/// Filter directive from config, falling back to `info`.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

fn build_subscriber(
    env_filter: EnvFilter,
    log_file: Option<File>,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    // Console goes to stderr so command output on stdout stays parseable.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let file_layer = log_file.map(|log_file| {
        fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_config_log_level() {
        let mut config = Config::default();
        config.debug.log_level = "warn,biomecalc_classifier=debug".to_string();
        assert_eq!(filter_directive(Some(&config)), "warn,biomecalc_classifier=debug");

        config.debug.log_level.clear();
        assert_eq!(filter_directive(Some(&config)), "info");
    }

    #[test]
    fn test_env_filter_parsing() {
        for filter_str in ["info", "debug,biomecalc_classifier=trace", "warn", "error"] {
            assert!(EnvFilter::try_new(filter_str).is_ok(), "failed to parse {filter_str}");
        }
    }

    #[test]
    fn test_json_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let file = File::create(&path).unwrap();

        let subscriber = build_subscriber(EnvFilter::new("debug"), Some(file));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(points = 42, "classifying raster");
            tracing::trace!("filtered out");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "DEBUG");
        assert_eq!(lines[0]["fields"]["message"], "classifying raster");
        assert_eq!(lines[0]["fields"]["points"], 42);
    }
}
