//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout stays free for report output.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if config.is_json() {
        builder.json().try_init()
    } else {
        builder.with_ansi(true).try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: LogFormat::Json,
        };
        let _ = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(second.is_err());
    }

    #[test]
    fn test_invalid_filter_is_an_error() {
        let config = LoggingConfig {
            level: "catlx=notalevel".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(init_tracing(&config).is_err());
    }
}
