//! Error handling for tile configuration and state access.

use thiserror::Error;

/// Result type for tile operations
pub type Result<T> = std::result::Result<T, TileError>;

/// Common error types for tile operations.
///
/// Color resolution itself never fails; a value that matches no bucket
/// degrades to the palette fallback. These errors cover the edges: loading
/// and saving configuration, and reading the host state export.
#[derive(Debug, Error)]
pub enum TileError {
    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing configuration or state data from text format.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse
        message: String,
        /// Optional source error for chaining
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error (invalid settings, etc.).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration issue
        message: String,
        /// The invalid configuration value if applicable
        value: Option<String>,
    },

    /// The configured entity has no entry in the state store.
    #[error("Entity not found: {entity_id}")]
    EntityNotFound {
        /// The entity id that was looked up
        entity_id: String,
    },
}

impl TileError {
    /// Create a new parse error with a simple message.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new parse error with a source error.
    pub fn parse_with_source<S: Into<String>, E>(message: S, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            value: None,
        }
    }

    /// Create a new configuration error with the invalid value.
    pub fn config_with_value<S: Into<String>, V: Into<String>>(message: S, value: V) -> Self {
        Self::Config {
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// Create a new entity-not-found error.
    pub fn entity_not_found<S: Into<String>>(entity_id: S) -> Self {
        Self::EntityNotFound {
            entity_id: entity_id.into(),
        }
    }
}

impl From<serde_json::Error> for TileError {
    fn from(err: serde_json::Error) -> Self {
        TileError::parse_with_source("invalid JSON", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = TileError::parse("bad threshold list");
        assert!(matches!(err, TileError::Parse { .. }));

        let err = TileError::config_with_value("invalid border", "120");
        assert!(matches!(err, TileError::Config { .. }));

        let err = TileError::entity_not_found("sensor.kitchen_co2");
        assert_eq!(
            err.to_string(),
            "Entity not found: sensor.kitchen_co2"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TileError = io_err.into();
        assert!(matches!(err, TileError::Io(_)));
    }
}
