//! Catalog registry with abbreviation lookup.
//!
//! Wraps [`CatalogData`] with per-collection hash indices and hands out
//! shared [`Arc`] references, so active vehicles can point at catalog
//! entries without copying them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::data::{CatalogData, VehicleType, VehicleUpgrade, WeaponType};
use crate::error::{Result, RosterError};

/// Embedded catalog shipped with the crate.
const BUILTIN_CATALOG_RON: &str = include_str!("../data/catalog.ron");

/// Origin label used in errors for the embedded catalog.
const BUILTIN_ORIGIN: &str = "<builtin>";

static BUILTIN: Lazy<Result<Catalog>> =
    Lazy::new(|| Catalog::from_ron_str(BUILTIN_CATALOG_RON, BUILTIN_ORIGIN));

/// Ordered, indexed, immutable collection of an entry type.
#[derive(Debug, Clone)]
struct Collection<T> {
    entries: Vec<Arc<T>>,
    index: HashMap<String, usize>,
}

impl<T> Collection<T> {
    fn new(items: Vec<T>, key: impl Fn(&T) -> &str) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        let mut entries = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            // First entry wins; duplicates are rejected by validation anyway.
            index.entry(key(&item).to_string()).or_insert(position);
            entries.push(Arc::new(item));
        }
        Self { entries, index }
    }

    fn get(&self, key: &str) -> Option<&Arc<T>> {
        self.index.get(key).map(|&position| &self.entries[position])
    }
}

/// Read-only catalog of vehicle types, weapons and upgrades.
///
/// Every entry is keyed by an abbreviation that is unique within its
/// collection. Lookups are O(1). Nothing mutates a catalog once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Collection<VehicleType>,
    weapons: Collection<WeaponType>,
    upgrades: Collection<VehicleUpgrade>,
}

impl Catalog {
    /// Build a catalog from validated data.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CatalogValidation`] if the data is inconsistent.
    pub fn new(data: CatalogData) -> Result<Self> {
        Self::from_data(data, "<inline>")
    }

    fn from_data(data: CatalogData, origin: &str) -> Result<Self> {
        let errors = data.validate();
        if !errors.is_empty() {
            return Err(RosterError::CatalogValidation {
                origin: origin.to_string(),
                errors,
            });
        }

        let CatalogData {
            vehicles,
            weapons,
            upgrades,
        } = data;

        let catalog = Self {
            vehicles: Collection::new(vehicles, |v| v.abbreviation.as_str()),
            weapons: Collection::new(weapons, |w| w.abbreviation.as_str()),
            upgrades: Collection::new(upgrades, |u| u.abbreviation.as_str()),
        };

        tracing::info!(
            "Loaded catalog '{}' with {} vehicle types, {} weapons, {} upgrades",
            origin,
            catalog.vehicles.entries.len(),
            catalog.weapons.entries.len(),
            catalog.upgrades.entries.len()
        );

        Ok(catalog)
    }

    /// Parse and validate a catalog from RON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or fails validation.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self> {
        let data: CatalogData =
            ron::from_str(contents).map_err(|source| RosterError::CatalogParse {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_data(data, origin)
    }

    /// Load a catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_ron_str(&contents, &origin)
    }

    /// The catalog embedded in this crate, parsed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is broken. This is an authoring
    /// bug caught by the test suite and by `gaslands-tools validate`.
    pub fn builtin() -> std::result::Result<&'static Catalog, &'static RosterError> {
        BUILTIN.as_ref()
    }

    /// Raw RON text of the embedded catalog.
    #[must_use]
    pub const fn builtin_source() -> &'static str {
        BUILTIN_CATALOG_RON
    }

    /// Find a vehicle type by abbreviation.
    #[must_use]
    pub fn vehicle(&self, abbreviation: &str) -> Option<&Arc<VehicleType>> {
        self.vehicles.get(abbreviation)
    }

    /// Find a weapon type by abbreviation.
    #[must_use]
    pub fn weapon(&self, abbreviation: &str) -> Option<&Arc<WeaponType>> {
        self.weapons.get(abbreviation)
    }

    /// Find an upgrade by abbreviation.
    #[must_use]
    pub fn upgrade(&self, abbreviation: &str) -> Option<&Arc<VehicleUpgrade>> {
        self.upgrades.get(abbreviation)
    }

    /// Find an upgrade by its display name.
    #[must_use]
    pub fn upgrade_by_name(&self, name: &str) -> Option<&Arc<VehicleUpgrade>> {
        self.upgrades.entries.iter().find(|u| u.name == name)
    }

    /// All vehicle types in catalog order.
    #[must_use]
    pub fn vehicles(&self) -> &[Arc<VehicleType>] {
        &self.vehicles.entries
    }

    /// All weapon types in catalog order.
    #[must_use]
    pub fn weapons(&self) -> &[Arc<WeaponType>] {
        &self.weapons.entries
    }

    /// All upgrades in catalog order.
    #[must_use]
    pub fn upgrades(&self) -> &[Arc<VehicleUpgrade>] {
        &self.upgrades.entries
    }

    /// Weapons fitted to every vehicle.
    pub fn default_weapons(&self) -> impl Iterator<Item = &Arc<WeaponType>> {
        self.weapons.entries.iter().filter(|w| w.is_default)
    }

    /// Upgrades included for free with a vehicle type, resolved by name.
    ///
    /// Names with no matching upgrade are skipped.
    pub fn included_upgrades<'a>(
        &'a self,
        vehicle_type: &'a VehicleType,
    ) -> impl Iterator<Item = &'a Arc<VehicleUpgrade>> + 'a {
        vehicle_type
            .included_upgrades
            .iter()
            .filter_map(|name| self.upgrade_by_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> &'static Catalog {
        Catalog::builtin().expect("builtin catalog should load")
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin();
        assert!(!catalog.vehicles().is_empty());
        assert!(!catalog.weapons().is_empty());
        assert!(!catalog.upgrades().is_empty());
    }

    #[test]
    fn test_lookup_by_abbreviation() {
        let catalog = builtin();
        assert_eq!(catalog.vehicle("bg").map(|v| v.name.as_str()), Some("Buggy"));
        assert_eq!(
            catalog.weapon("mg").map(|w| w.name.as_str()),
            Some("Machine Gun")
        );
        assert_eq!(
            catalog.upgrade("c").map(|u| u.name.as_str()),
            Some("Extra Crewmember")
        );
        assert!(catalog.vehicle("zz").is_none());
    }

    #[test]
    fn test_collections_keep_catalog_order() {
        let catalog = builtin();
        assert_eq!(catalog.vehicles()[0].abbreviation, "bg");
        assert_eq!(catalog.weapons()[0].abbreviation, "hg");
        assert_eq!(catalog.upgrades()[0].abbreviation, "ap");
    }

    #[test]
    fn test_default_weapons() {
        let catalog = builtin();
        let defaults: Vec<_> = catalog
            .default_weapons()
            .map(|w| w.abbreviation.as_str())
            .collect();
        assert_eq!(defaults, vec!["hg"]);
    }

    #[test]
    fn test_included_upgrades_resolve_by_name() {
        let catalog = builtin();
        let buggy = catalog.vehicle("bg").expect("buggy");
        let included: Vec<_> = catalog
            .included_upgrades(buggy)
            .map(|u| u.abbreviation.as_str())
            .collect();
        assert_eq!(included, vec!["rc"]);

        let car = catalog.vehicle("c").expect("car");
        assert_eq!(catalog.included_upgrades(car).count(), 0);
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let result = Catalog::from_ron_str("CatalogData(vehicles: [", "broken.ron");
        assert!(matches!(result, Err(RosterError::CatalogParse { .. })));
    }

    #[test]
    fn test_duplicate_abbreviation_is_rejected() {
        let mut data: CatalogData =
            ron::from_str(Catalog::builtin_source()).expect("builtin parses");
        let duplicate = data.vehicles[0].clone();
        data.vehicles.push(duplicate);

        let result = Catalog::new(data);
        assert!(matches!(
            result,
            Err(RosterError::CatalogValidation { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Catalog::load(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }
}
