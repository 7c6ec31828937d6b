/*!
 * Error types for the genko application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error
 * definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while working with configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when reading a configuration file fails
    #[error("Failed to read config file: {0}")]
    ReadFailed(String),

    /// Error when parsing a configuration file fails
    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    /// Error when the configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during character counting
///
/// Counting is total over its input: empty input yields zeros and
/// malformed markup degrades best-effort, so there is nothing to fail.
#[derive(Error, Debug)]
pub enum CountError {}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from character counting
    #[error("Count error: {0}")]
    Count(#[from] CountError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
