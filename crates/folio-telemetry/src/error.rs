//! Error types for telemetry operations.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors raised while installing logging.
#[derive(Debug)]
pub enum TelemetryError {
    /// The configured level string is not a valid filter directive.
    InvalidLevel {
        /// Level string as configured.
        level: String,
        /// Underlying directive parse error.
        source: ParseError,
    },
    /// Installing the tracing subscriber failed.
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        source: TryInitError,
    },
}

impl Display for TelemetryError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { .. } => formatter.write_str("invalid log level directive"),
            Self::SubscriberInstall { .. } => {
                formatter.write_str("failed to install tracing subscriber")
            }
        }
    }
}

impl Error for TelemetryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLevel { source, .. } => Some(source),
            Self::SubscriberInstall { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn invalid_level_keeps_source_and_constant_message() {
        let source = EnvFilter::try_new("folio=loud").expect_err("level should be rejected");
        let err = TelemetryError::InvalidLevel {
            level: "folio=loud".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid log level directive");
        assert!(err.source().is_some());
        assert!(format!("{err:?}").contains("folio=loud"));
    }
}
