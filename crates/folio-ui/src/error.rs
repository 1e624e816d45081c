//! # Design
//!
//! - Constant error messages; context lives in structured fields.
//! - Nothing here is fatal to the page: callers log and carry on without the feature.

use thiserror::Error;

/// Errors raised while reading the page configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the expected shape.
    #[error("portfolio config parse failure")]
    Parse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A field held a value outside its accepted range.
    #[error("invalid portfolio config field")]
    InvalidField {
        /// Section containing the field.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
    },
}

/// Errors raised while binding page features to the document.
#[derive(Debug, Error)]
pub enum UiError {
    /// An element a feature depends on is absent from the markup.
    #[error("required page element missing")]
    MissingElement {
        /// Selector used to look the element up.
        selector: &'static str,
    },
    /// A browser API call failed.
    #[error("dom operation failed")]
    Dom {
        /// Operation that failed.
        operation: &'static str,
        /// Stringified JavaScript error.
        detail: String,
    },
    /// The embedded configuration could not be used.
    #[error("page configuration rejected")]
    Config(#[from] ConfigError),
}

/// Result alias for page binding operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_error_converts_and_keeps_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").map_err(|source| {
            ConfigError::Parse { source }
        });
        let Err(config_err) = parse else {
            panic!("expected parse failure");
        };
        let err = UiError::from(config_err);
        assert_eq!(err.to_string(), "page configuration rejected");
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_element_message_is_constant() {
        let err = UiError::MissingElement { selector: "#toast" };
        assert_eq!(err.to_string(), "required page element missing");
    }
}
