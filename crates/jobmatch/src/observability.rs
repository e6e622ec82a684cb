//! Logging and tracing bootstrap.
//!
//! Logs go to stderr by default, or to a daily-rotated file when a log
//! directory is configured. `RUST_LOG` always wins over the derived level.

use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Build the env filter from CLI flags and the configured log level.
///
/// Precedence: `RUST_LOG` if set, then `--quiet` (errors only), then
/// `--verbose` (once: debug, twice or more: trace), then the config level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns a worker guard when logging to a file; the guard must be held
/// for the life of the process so buffered log lines get flushed.
pub fn init_observability(
    log_dir: Option<&Utf8Path>,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "jobmatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        let filter = env_filter(true, 3, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_levels_map_to_debug_and_trace() {
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn config_level_used_by_default() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
    }
}
