//! Error types for the roster core.

use thiserror::Error;

/// Result type alias using [`RosterError`].
pub type Result<T> = std::result::Result<T, RosterError>;

/// Top-level error type for catalog, configuration and token handling.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Failed to read a data file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog RON could not be parsed.
    #[error("Failed to parse catalog '{origin}': {source}")]
    CatalogParse {
        /// File path, or `<builtin>` for the embedded catalog.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Catalog data failed validation.
    #[error("Catalog '{origin}' failed validation: {errors:?}")]
    CatalogValidation {
        /// File path, or `<builtin>` for the embedded catalog.
        origin: String,
        /// List of validation errors.
        errors: Vec<String>,
    },

    /// Configuration RON could not be parsed.
    #[error("Failed to parse configuration '{origin}': {source}")]
    ConfigParse {
        /// File path, or `<inline>`.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// No roster format could decode the token.
    #[error("Unable to decode roster token: {0}")]
    Decode(String),

    /// A roster could not be encoded.
    #[error("Unable to encode roster: {0}")]
    Encode(String),
}
