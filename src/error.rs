//! Error types for translation operations

use thiserror::Error;

/// Errors that can occur while loading catalogs or parsing locales.
///
/// The runtime core (segment selection, plural resolution, placeholder
/// substitution) is total and never returns an error; only the catalog
/// loading surface can fail.
#[derive(Debug, Error)]
pub enum LingoError {
    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Failed to parse a catalog file
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
