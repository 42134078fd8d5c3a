//! Error handling module for coverage-quote
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The quoting form itself has no failure paths; these errors cover config
//! validation, catalogs, resolving icons, and driving the terminal.

use thiserror::Error;

/// Main error type for coverage-quote
#[derive(Error, Debug)]
pub enum QuoteError {
    /// IO errors (config files, icon assets, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog construction errors (duplicate or blank names)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A plan name that is not part of the catalog
    #[error("Unknown offering: {0}")]
    UnknownOffering(String),

    /// Icon resolution errors
    #[error("Icon error: {0}")]
    Icon(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for coverage-quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an unknown-offering error
    pub fn unknown_offering(name: impl Into<String>) -> Self {
        Self::UnknownOffering(name.into())
    }

    /// Create an icon error
    pub fn icon(msg: impl Into<String>) -> Self {
        Self::Icon(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::config("no offerings");
        assert_eq!(err.to_string(), "Configuration error: no offerings");

        let err = QuoteError::unknown_offering("Kaiser");
        assert_eq!(err.to_string(), "Unknown offering: Kaiser");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuoteError = io_err.into();
        assert!(matches!(err, QuoteError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(QuoteError::catalog("dup"), QuoteError::Catalog(_)));
        assert!(matches!(QuoteError::icon("missing"), QuoteError::Icon(_)));
        assert!(matches!(QuoteError::terminal("raw mode"), QuoteError::Terminal(_)));
    }
}
