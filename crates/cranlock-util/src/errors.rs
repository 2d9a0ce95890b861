use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for cranlock operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum CranlockError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed global configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.cranlock/config.toml for syntax errors"))]
    Config { message: String },

    /// A package list or version file could not be read.
    #[error("Invalid input: {message}")]
    Input { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// An external process (e.g. docker) failed.
    #[error("Process failed: {message}")]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
