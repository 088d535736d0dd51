//! Error types for the tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total; errors only arise while
//! loading configuration, parsing keys strictly, or validating inputs at the
//! boundary.

use thiserror::Error;

/// The main error type for the tax engine.
///
/// # Example
///
/// ```
/// use gy_tax_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
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

    /// Configuration parsed but violates an invariant of the tax schedule.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// A payment frequency key did not match any known frequency.
    #[error("Unknown payment frequency: {key}")]
    UnknownFrequency {
        /// The key that was not recognised.
        key: String,
    },

    /// A position preset id was not found in the configuration.
    #[error("Position preset not found: {id}")]
    PositionNotFound {
        /// The preset id that was not found.
        id: String,
    },

    /// An input field failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
