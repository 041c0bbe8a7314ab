//! # Gaslands Tools
//!
//! Command-line tools for roster work:
//! - Catalog validation
//! - Roster token inspection
//! - Random roster generation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod generate;
pub mod report;
pub mod validate;

use gaslands_core::error::RosterError;
use thiserror::Error;

/// Errors surfaced by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Catalog, configuration or token failure from the core.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The embedded catalog failed to load.
    #[error("Embedded catalog is broken: {0}")]
    BuiltinCatalog(String),

    /// Report serialization failed.
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`ToolError`].
pub type Result<T> = std::result::Result<T, ToolError>;
