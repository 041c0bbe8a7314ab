//! Catalog validation.

use std::path::Path;

use gaslands_core::catalog::Catalog;

use crate::{Result, ToolError};

/// Counts reported for a catalog that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Vehicle types.
    pub vehicles: usize,
    /// Weapon types.
    pub weapons: usize,
    /// Upgrades.
    pub upgrades: usize,
}

impl CatalogSummary {
    fn of(catalog: &Catalog) -> Self {
        Self {
            vehicles: catalog.vehicles().len(),
            weapons: catalog.weapons().len(),
            upgrades: catalog.upgrades().len(),
        }
    }
}

/// The embedded catalog, with its load error mapped for the tools.
///
/// # Errors
///
/// Returns [`ToolError::BuiltinCatalog`] if the embedded data is broken.
pub fn builtin_catalog() -> Result<&'static Catalog> {
    Catalog::builtin().map_err(|e| ToolError::BuiltinCatalog(e.to_string()))
}

/// Validate a catalog RON file, or the embedded catalog when `path` is
/// `None`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed or validated.
pub fn validate_catalog(path: Option<&Path>) -> Result<CatalogSummary> {
    match path {
        Some(path) => Ok(CatalogSummary::of(&Catalog::load(path)?)),
        None => Ok(CatalogSummary::of(builtin_catalog()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        let summary = validate_catalog(None).expect("builtin catalog is valid");
        assert!(summary.vehicles > 0);
        assert!(summary.weapons > 0);
        assert!(summary.upgrades > 0);
    }

    #[test]
    fn test_missing_file_fails() {
        let result = validate_catalog(Some(Path::new("does/not/exist.ron")));
        assert!(matches!(result, Err(ToolError::Roster(_))));
    }
}
