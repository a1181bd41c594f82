//! Logging and tracing initialization.

use tracing_subscriber::EnvFilter;

/// Build the env filter from flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `-q` forces `error`, each `-v`
/// steps the configured level toward `trace`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match (config_level, verbose) {
            (level, 0) => level,
            ("error", 1) => "warn",
            ("warn", 1) | ("error", 2) => "info",
            ("info", 1) | ("warn", 2) | ("error", 3) => "debug",
            _ => "trace",
        }
    };

    EnvFilter::new(level)
}

/// Install the global subscriber, writing human-readable logs to stderr.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
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
    fn verbose_steps_toward_trace() {
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn config_level_is_the_baseline() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
    }
}
