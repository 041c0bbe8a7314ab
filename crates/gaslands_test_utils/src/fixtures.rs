//! Test fixtures and helpers.
//!
//! Vehicles and teams built from the embedded catalog through the public
//! edit API, so every fixture is a team the builder could produce.

use std::sync::Arc;

use gaslands_core::catalog::Catalog;
use gaslands_core::data::{VehicleUpgrade, WeaponType};
use gaslands_core::facing::Direction;
use gaslands_core::team::Team;
use gaslands_core::vehicle::ActiveVehicle;

/// The embedded catalog.
///
/// # Panics
///
/// Panics if the embedded catalog is broken.
#[must_use]
pub fn catalog() -> &'static Catalog {
    Catalog::builtin().expect("builtin catalog should load")
}

/// A fresh vehicle of the given type.
///
/// # Panics
///
/// Panics if the abbreviation is not in the catalog.
#[must_use]
pub fn vehicle(abbreviation: &str, name: &str) -> ActiveVehicle {
    let catalog = catalog();
    let vehicle_type = catalog
        .vehicle(abbreviation)
        .unwrap_or_else(|| panic!("unknown vehicle type '{abbreviation}'"));
    ActiveVehicle::new(catalog, Arc::clone(vehicle_type), name)
}

/// A catalog weapon.
///
/// # Panics
///
/// Panics if the abbreviation is not in the catalog.
#[must_use]
pub fn weapon(abbreviation: &str) -> Arc<WeaponType> {
    Arc::clone(
        catalog()
            .weapon(abbreviation)
            .unwrap_or_else(|| panic!("unknown weapon '{abbreviation}'")),
    )
}

/// A catalog upgrade.
///
/// # Panics
///
/// Panics if the abbreviation is not in the catalog.
#[must_use]
pub fn upgrade(abbreviation: &str) -> Arc<VehicleUpgrade> {
    Arc::clone(
        catalog()
            .upgrade(abbreviation)
            .unwrap_or_else(|| panic!("unknown upgrade '{abbreviation}'")),
    )
}

/// A car with a turret machine gun, a rear ram and armour.
///
/// # Panics
///
/// Panics if an edit is refused.
#[must_use]
pub fn armed_car() -> ActiveVehicle {
    vehicle("c", "Interceptor")
        .with_weapon(&weapon("mg"))
        .and_then(|v| v.with_weapon_rotated(1))
        .and_then(|v| v.with_weapon_rotated(1))
        .and_then(|v| v.with_weapon_rotated(1))
        .and_then(|v| v.with_upgrade_facing(&upgrade("r"), Some(Direction::Rear)))
        .and_then(|v| v.with_upgrade(&upgrade("ap")))
        .expect("armed car edits should apply")
}

/// A buggy dropping mines.
///
/// # Panics
///
/// Panics if an edit is refused.
#[must_use]
pub fn mine_buggy() -> ActiveVehicle {
    vehicle("bg", "Dusty")
        .with_weapon(&weapon("mn"))
        .expect("mine buggy edits should apply")
}

/// A two-vehicle team.
#[must_use]
pub fn sample_team() -> Team {
    Team {
        name: "Road Warriors".to_string(),
        vehicles: vec![armed_car(), mine_buggy()],
    }
}
