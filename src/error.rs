//! Error types for Boxkite

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Boxkite operations
pub type Result<T> = std::result::Result<T, BoxkiteError>;

/// Main error type for Boxkite
///
/// Only configuration and YAML errors ever escape a run; task-level failures
/// travel as [`crate::runner::Outcome`] values instead.
#[derive(Error, Debug)]
pub enum BoxkiteError {
    /// Configuration-related errors (missing or circular node definitions)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Node definition loading errors
///
/// These are configuration errors: a missing or broken node file terminates
/// the whole run, it is never represented as a task failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Node '{name}' is not defined (searched: {searched})")]
    NodeNotFound { name: String, searched: String },

    #[error("Failed to read node file '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },

    #[error("Circular node reference detected: {0}")]
    CircularReference(String),
}

/// Template rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unterminated '${{' placeholder in template: {0}")]
    UnterminatedPlaceholder(String),
}

/// Specialized result type for template rendering
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
