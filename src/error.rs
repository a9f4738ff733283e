//! Error types for the severance calculator.
//!
//! The calculation itself never fails; these errors only arise at the edges,
//! when configuration is loaded or when a request names something the engine
//! does not know about.

use thiserror::Error;

/// The main error type for the severance calculator.
///
/// # Example
///
/// ```
/// use pesangon_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/contact.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/contact.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the calculator cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, dotted from the file root.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A termination reason value that is not part of the catalogue.
    #[error("Unknown termination reason: {value}")]
    UnknownTerminationReason {
        /// The value that was supplied.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
