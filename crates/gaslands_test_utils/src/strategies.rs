//! Proptest strategies for rosters.
//!
//! Generated vehicles are built through the public edit API from catalog
//! indices, so they always satisfy the builder's invariants. Refused edits
//! are skipped.

use std::sync::Arc;

use gaslands_core::team::Team;
use gaslands_core::vehicle::ActiveVehicle;
use proptest::prelude::*;

use crate::fixtures::catalog;

/// Weapon choice: `(catalog index, rotations)`.
type WeaponPick = (usize, u8);

fn build_vehicle(
    vehicle_index: usize,
    weapons: &[WeaponPick],
    upgrades: &[usize],
    name: String,
) -> ActiveVehicle {
    let catalog = catalog();
    let types = catalog.vehicles();
    let vehicle_type = &types[vehicle_index % types.len()];
    let mut vehicle = ActiveVehicle::new(catalog, Arc::clone(vehicle_type), name);

    let weapon_types = catalog.weapons();
    for &(index, rotations) in weapons {
        let Ok(armed) = vehicle.with_weapon(&weapon_types[index % weapon_types.len()]) else {
            continue;
        };
        vehicle = armed;
        let position = vehicle.weapons.len() - 1;
        for _ in 0..rotations {
            if let Ok(rotated) = vehicle.with_weapon_rotated(position) {
                vehicle = rotated;
            }
        }
    }

    let upgrade_types = catalog.upgrades();
    for &index in upgrades {
        if let Ok(upgraded) = vehicle.with_upgrade(&upgrade_types[index % upgrade_types.len()]) {
            vehicle = upgraded;
        }
    }

    vehicle
}

/// Generate a display name, possibly empty, possibly non-ASCII.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 '&é🚗]{0,16}"
}

/// Generate a vehicle built from the embedded catalog.
pub fn arb_vehicle() -> impl Strategy<Value = ActiveVehicle> {
    (
        any::<usize>(),
        proptest::collection::vec((any::<usize>(), 0u8..4), 0..4),
        proptest::collection::vec(any::<usize>(), 0..5),
        arb_name(),
    )
        .prop_map(|(vehicle_index, weapons, upgrades, name)| {
            build_vehicle(vehicle_index, &weapons, &upgrades, name)
        })
}

/// Generate a team of up to `max_vehicles` vehicles.
pub fn arb_team(max_vehicles: usize) -> impl Strategy<Value = Team> {
    (
        arb_name(),
        proptest::collection::vec(arb_vehicle(), 0..=max_vehicles),
    )
        .prop_map(|(name, vehicles)| Team { name, vehicles })
}

/// Generate a random-assembly cost target in cans.
pub fn arb_cost_target() -> impl Strategy<Value = u32> {
    0u32..120
}
