//! Catalog data structure combining all catalog collections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::upgrade_data::VehicleUpgrade;
use super::vehicle_data::VehicleType;
use super::weapon_data::WeaponType;

/// Complete catalog definition.
///
/// Contains every vehicle type, weapon and upgrade a roster may reference.
/// Loaded from a RON file once at startup.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     vehicles: [...],
///     weapons: [...],
///     upgrades: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// All vehicle types, in display order.
    pub vehicles: Vec<VehicleType>,

    /// All weapon types, in display order.
    pub weapons: Vec<WeaponType>,

    /// All vehicle upgrades, in display order.
    pub upgrades: Vec<VehicleUpgrade>,
}

impl CatalogData {
    /// Find an upgrade by name.
    #[must_use]
    pub fn get_upgrade_by_name(&self, name: &str) -> Option<&VehicleUpgrade> {
        self.upgrades.iter().find(|u| u.name == name)
    }

    /// Validate internal consistency of catalog data.
    ///
    /// Checks for:
    /// - Abbreviations are unique within each collection
    /// - Included and forbidden upgrade names reference real upgrades
    /// - No upgrade is both included and forbidden on the same vehicle
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        check_unique(
            "Vehicle type",
            self.vehicles.iter().map(|v| v.abbreviation.as_str()),
            &mut errors,
        );
        check_unique(
            "Weapon type",
            self.weapons.iter().map(|w| w.abbreviation.as_str()),
            &mut errors,
        );
        check_unique(
            "Upgrade",
            self.upgrades.iter().map(|u| u.abbreviation.as_str()),
            &mut errors,
        );

        for vehicle in &self.vehicles {
            for name in &vehicle.included_upgrades {
                if self.get_upgrade_by_name(name).is_none() {
                    errors.push(format!(
                        "Vehicle type '{}' includes unknown upgrade '{}'",
                        vehicle.abbreviation, name
                    ));
                }
                if vehicle.forbids_upgrade(name) {
                    errors.push(format!(
                        "Vehicle type '{}' both includes and forbids upgrade '{}'",
                        vehicle.abbreviation, name
                    ));
                }
            }

            for name in &vehicle.forbidden_upgrades {
                if self.get_upgrade_by_name(name).is_none() {
                    errors.push(format!(
                        "Vehicle type '{}' forbids unknown upgrade '{}'",
                        vehicle.abbreviation, name
                    ));
                }
            }
        }

        errors
    }
}

/// Push an error for every abbreviation seen more than once.
fn check_unique<'a>(
    kind: &str,
    abbreviations: impl Iterator<Item = &'a str>,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for abbreviation in abbreviations {
        if !seen.insert(abbreviation) {
            errors.push(format!(
                "{kind} abbreviation '{abbreviation}' is used more than once"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{UpgradeQuantity, VehicleWeight, WeaponRange};

    fn create_test_catalog_data() -> CatalogData {
        CatalogData {
            vehicles: vec![VehicleType {
                name: "Buggy".to_string(),
                abbreviation: "bg".to_string(),
                weight: VehicleWeight::Lightweight,
                hull: 6,
                handling: 4,
                max_gear: 6,
                crew: 2,
                build_slots: 2,
                cost: 6,
                special_rule: None,
                included_upgrades: vec!["Roll Cage".to_string()],
                forbidden_upgrades: vec![],
            }],
            weapons: vec![WeaponType {
                name: "Machine Gun".to_string(),
                abbreviation: "mg".to_string(),
                range: WeaponRange::Double,
                attack_dice: 2,
                special_rules: vec![],
                build_slots: 1,
                cost: 2,
                is_default: false,
                is_crew_fired: false,
                ammo: None,
                description: None,
            }],
            upgrades: vec![VehicleUpgrade {
                name: "Roll Cage".to_string(),
                abbreviation: "rc".to_string(),
                description: "Ignore 2 hits from flip".to_string(),
                effects: vec![],
                build_slots: 1,
                cost: 4,
                quantity: UpgradeQuantity::Single,
                configurable_facing: false,
                ammo: None,
            }],
        }
    }

    #[test]
    fn test_validate_valid_data() {
        let data = create_test_catalog_data();
        let errors = data.validate();
        assert!(errors.is_empty(), "Errors: {:?}", errors);
    }

    #[test]
    fn test_validate_duplicate_abbreviation() {
        let mut data = create_test_catalog_data();
        let mut duplicate = data.weapons[0].clone();
        duplicate.name = "Twin Machine Gun".to_string();
        data.weapons.push(duplicate);

        let errors = data.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'mg'"));
    }

    #[test]
    fn test_validate_unknown_included_upgrade() {
        let mut data = create_test_catalog_data();
        data.vehicles[0]
            .included_upgrades
            .push("Flux Capacitor".to_string());

        let errors = data.validate();
        assert!(!errors.is_empty());
        assert!(errors[0].contains("unknown upgrade"));
    }

    #[test]
    fn test_validate_included_and_forbidden() {
        let mut data = create_test_catalog_data();
        data.vehicles[0]
            .forbidden_upgrades
            .push("Roll Cage".to_string());

        let errors = data.validate();
        assert!(errors.iter().any(|e| e.contains("both includes and forbids")));
    }
}
