//! Telemetry initialisation primitives and logging configuration.
//!
//! # Design
//! - One entry point installs the global subscriber; repeated calls are no-ops.
//! - Timestamps are omitted on wasm32, which has no system clock to read.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{Result, TelemetryError};

/// Default level when neither the configuration nor `RUST_LOG` provides one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive (e.g., `info`, `folio_ui=debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Configure and install the global tracing subscriber.
///
/// Succeeds without doing anything once a subscriber has been installed here.
///
/// # Errors
///
/// Returns an error when the level directive does not parse or another
/// subscriber already owns the global default.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    INSTALLED.get_or_try_init(|| {
        let filter = build_env_filter(config.level)?;
        install(config.format, filter)
    })?;
    Ok(())
}

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if cfg!(not(target_arch = "wasm32")) {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    parse_level(level)
}

fn parse_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidLevel {
        level: level.to_string(),
        source,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn install(format: LogFormat, filter: EnvFilter) -> Result<()> {
    install_with_writer(format, filter, std::io::stderr, true)
}

#[cfg(target_arch = "wasm32")]
fn install(format: LogFormat, filter: EnvFilter) -> Result<()> {
    install_with_writer(format, filter, crate::console::ConsoleMakeWriter, false)
}

fn install_with_writer<W>(format: LogFormat, filter: EnvFilter, writer: W, timed: bool) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    let result = match (format, timed) {
        (LogFormat::Json, true) => registry
            .with(fmt::layer().json().with_target(false).with_writer(writer))
            .try_init(),
        (LogFormat::Json, false) => registry
            .with(
                fmt::layer()
                    .json()
                    .without_time()
                    .with_target(false)
                    .with_writer(writer),
            )
            .try_init(),
        (LogFormat::Pretty, true) => registry
            .with(fmt::layer().with_target(false).with_writer(writer))
            .try_init(),
        (LogFormat::Pretty, false) => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(writer),
            )
            .try_init(),
    };
    result.map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        };
        assert_eq!(LogFormat::infer(), expected);
        assert_eq!(LoggingConfig::default().level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn parse_level_accepts_directives() {
        assert!(parse_level("info").is_ok());
        assert!(parse_level("folio_ui=debug,warn").is_ok());
    }

    #[test]
    fn parse_level_rejects_unknown_levels() {
        let err = parse_level("folio_ui=loud").expect_err("unknown level");
        assert!(matches!(err, TelemetryError::InvalidLevel { ref level, .. } if level == "folio_ui=loud"));
    }

    #[test]
    fn init_logging_installs_subscriber_once() {
        let config = LoggingConfig {
            level: "info",
            format: LogFormat::Pretty,
        };
        init_logging(&config).expect("first install");
        init_logging(&config).expect("repeat install is a no-op");
        tracing::info!("telemetry test event");
    }
}
