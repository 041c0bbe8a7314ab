//! Derived vehicle statistics.
//!
//! Every function here is pure: it reads an [`ActiveVehicle`] (and through
//! it the shared catalog entries) and never mutates anything.

use serde::Serialize;

use crate::data::{UpgradeQuantity, VehicleUpgrade};
use crate::facing::possible_directions;
use crate::team::Team;
use crate::vehicle::{ActiveVehicle, ActiveWeapon};

/// Lowest gear any vehicle can be limited to.
pub const MIN_GEAR: i32 = 1;

/// Highest gear in the game.
pub const MAX_GEAR: i32 = 6;

/// Cost of a weapon as fitted. Paid 360° turrets cost three times the base.
#[must_use]
pub fn effective_weapon_cost(weapon: &ActiveWeapon) -> u32 {
    if weapon.facing.is_turret_mounted() {
        weapon.weapon_type.cost.saturating_mul(3)
    } else {
        weapon.weapon_type.cost
    }
}

/// Total cost of a vehicle in cans.
///
/// Upgrades included with the vehicle type are free. Saturates rather
/// than overflowing.
#[must_use]
pub fn total_cost(vehicle: &ActiveVehicle) -> u32 {
    let weapons = vehicle
        .weapons
        .iter()
        .map(effective_weapon_cost)
        .fold(0, u32::saturating_add);
    let upgrades = vehicle
        .upgrades
        .iter()
        .filter(|a| !vehicle.is_upgrade_included(&a.upgrade))
        .map(|a| a.upgrade.cost.saturating_mul(a.amount))
        .fold(0, u32::saturating_add);

    vehicle
        .vehicle_type
        .cost
        .saturating_add(weapons)
        .saturating_add(upgrades)
}

fn amount_weighted(vehicle: &ActiveVehicle, bonus: impl Fn(&VehicleUpgrade) -> i32) -> i32 {
    vehicle
        .upgrades
        .iter()
        .map(|a| bonus(&a.upgrade).saturating_mul(i32::try_from(a.amount).unwrap_or(i32::MAX)))
        .fold(0, i32::saturating_add)
}

/// Hull points including armour plating.
#[must_use]
pub fn total_hull(vehicle: &ActiveVehicle) -> i32 {
    vehicle
        .vehicle_type
        .hull
        .saturating_add(amount_weighted(vehicle, VehicleUpgrade::hull_bonus))
}

/// Crew including extra crewmembers.
#[must_use]
pub fn total_crew(vehicle: &ActiveVehicle) -> i32 {
    vehicle
        .vehicle_type
        .crew
        .saturating_add(amount_weighted(vehicle, VehicleUpgrade::crew_bonus))
}

/// Handling including upgrade modifiers.
#[must_use]
pub fn handling(vehicle: &ActiveVehicle) -> i32 {
    vehicle
        .vehicle_type
        .handling
        .saturating_add(amount_weighted(vehicle, VehicleUpgrade::handling_bonus))
}

/// Max gear including upgrade modifiers, clamped to `[1, 6]`.
#[must_use]
pub fn max_gear(vehicle: &ActiveVehicle) -> i32 {
    vehicle
        .vehicle_type
        .max_gear
        .saturating_add(amount_weighted(vehicle, VehicleUpgrade::gear_bonus))
        .clamp(MIN_GEAR, MAX_GEAR)
}

/// Build slots taken by weapons and upgrades.
#[must_use]
pub fn build_slots_in_use(vehicle: &ActiveVehicle) -> u32 {
    let weapons = vehicle
        .weapons
        .iter()
        .map(|w| w.weapon_type.build_slots)
        .fold(0, u32::saturating_add);
    let upgrades = vehicle
        .upgrades
        .iter()
        .map(|a| a.upgrade.build_slots.saturating_mul(a.amount))
        .fold(0, u32::saturating_add);
    weapons.saturating_add(upgrades)
}

/// Build slots still free. Never negative.
#[must_use]
pub fn remaining_build_slots(vehicle: &ActiveVehicle) -> u32 {
    vehicle
        .vehicle_type
        .build_slots
        .saturating_sub(build_slots_in_use(vehicle))
}

/// Maximum amount of a `Limited` upgrade on this vehicle.
///
/// Upgrades without a rule are capped at zero.
#[must_use]
pub fn upgrade_quantity_limit(upgrade: &VehicleUpgrade, vehicle: &ActiveVehicle) -> u32 {
    match upgrade.abbreviation.as_str() {
        "c" => u32::try_from(vehicle.vehicle_type.crew).unwrap_or(0),
        _ => 0,
    }
}

/// Check if one more unit of `upgrade` may be fitted to `vehicle`.
#[must_use]
pub fn can_add_upgrade(upgrade: &VehicleUpgrade, vehicle: &ActiveVehicle) -> bool {
    if vehicle.vehicle_type.forbids_upgrade(&upgrade.name) {
        return false;
    }

    match upgrade.quantity {
        UpgradeQuantity::Single => vehicle
            .upgrades
            .iter()
            .all(|a| a.upgrade.abbreviation != upgrade.abbreviation),
        UpgradeQuantity::Unlimited => true,
        UpgradeQuantity::Limited => {
            vehicle.upgrade_amount(upgrade) < upgrade_quantity_limit(upgrade, vehicle)
        }
        UpgradeQuantity::SingleEachFacing => {
            !possible_directions(upgrade, &vehicle.upgrades).is_empty()
        }
    }
}

/// Total cost of every vehicle on a team.
#[must_use]
pub fn team_total_cost(team: &Team) -> u32 {
    team.vehicles
        .iter()
        .map(total_cost)
        .fold(0, u32::saturating_add)
}

/// Snapshot of every derived statistic of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleStats {
    /// Total cost in cans.
    pub cost: u32,
    /// Hull points.
    pub hull: i32,
    /// Handling.
    pub handling: i32,
    /// Max gear, in `[1, 6]`.
    pub max_gear: i32,
    /// Crew.
    pub crew: i32,
    /// Build slots in use.
    pub build_slots_used: u32,
    /// Build slot capacity of the vehicle type.
    pub build_slots_total: u32,
}

impl VehicleStats {
    /// Derive the snapshot for a vehicle.
    #[must_use]
    pub fn of(vehicle: &ActiveVehicle) -> Self {
        Self {
            cost: total_cost(vehicle),
            hull: total_hull(vehicle),
            handling: handling(vehicle),
            max_gear: max_gear(vehicle),
            crew: total_crew(vehicle),
            build_slots_used: build_slots_in_use(vehicle),
            build_slots_total: vehicle.vehicle_type.build_slots,
        }
    }

    /// Build slots still free.
    #[must_use]
    pub const fn build_slots_remaining(&self) -> u32 {
        self.build_slots_total.saturating_sub(self.build_slots_used)
    }
}
