//! JSON reports for decoded teams and catalog listings.

use serde::Serialize;

use gaslands_core::catalog::Catalog;
use gaslands_core::stats::{self, VehicleStats};
use gaslands_core::team::Team;
use gaslands_core::vehicle::ActiveVehicle;

/// A team with every derived statistic filled in.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    /// Team name.
    pub name: String,
    /// Total cost in cans.
    pub total_cost: u32,
    /// Token the team encodes to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Vehicles in display order.
    pub vehicles: Vec<VehicleReport>,
}

/// One vehicle in a [`TeamReport`].
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    /// Display name.
    pub name: String,
    /// Vehicle type name.
    pub vehicle_type: String,
    /// Weight class.
    pub weight: String,
    /// Derived statistics.
    pub stats: VehicleStats,
    /// Fitted weapons.
    pub weapons: Vec<WeaponReport>,
    /// Fitted upgrades.
    pub upgrades: Vec<UpgradeReport>,
}

/// One weapon in a [`VehicleReport`].
#[derive(Debug, Clone, Serialize)]
pub struct WeaponReport {
    /// Weapon name.
    pub name: String,
    /// Arc of fire label.
    pub facing: String,
    /// Cost as fitted.
    pub cost: u32,
}

/// One upgrade in a [`VehicleReport`].
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeReport {
    /// Upgrade name.
    pub name: String,
    /// Times fitted.
    pub amount: u32,
    /// Mounting direction label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Whether the upgrade comes free with the vehicle type.
    pub included: bool,
}

impl VehicleReport {
    /// Build the report for a vehicle.
    #[must_use]
    pub fn of(vehicle: &ActiveVehicle) -> Self {
        Self {
            name: vehicle.name.clone(),
            vehicle_type: vehicle.vehicle_type.name.clone(),
            weight: vehicle.vehicle_type.weight.display_name().to_string(),
            stats: VehicleStats::of(vehicle),
            weapons: vehicle
                .weapons
                .iter()
                .map(|w| WeaponReport {
                    name: w.weapon_type.name.clone(),
                    facing: w.facing.direction().label().to_string(),
                    cost: stats::effective_weapon_cost(w),
                })
                .collect(),
            upgrades: vehicle
                .upgrades
                .iter()
                .map(|u| UpgradeReport {
                    name: u.upgrade.name.clone(),
                    amount: u.amount,
                    direction: u.direction.map(|d| d.label().to_string()),
                    included: vehicle.is_upgrade_included(&u.upgrade),
                })
                .collect(),
        }
    }
}

impl TeamReport {
    /// Build the report for a team.
    #[must_use]
    pub fn of(team: &Team, token: Option<String>) -> Self {
        Self {
            name: team.name.clone(),
            total_cost: team.total_cost(),
            token,
            vehicles: team.vehicles.iter().map(VehicleReport::of).collect(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One line per catalog entry: abbreviation, name, cost and slots.
#[must_use]
pub fn catalog_lines(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Vehicles:".to_string()];
    lines.extend(catalog.vehicles().iter().map(|v| {
        format!(
            "  {:<4} {:<20} {:>3} cans  {} slots  {}",
            v.abbreviation,
            v.name,
            v.cost,
            v.build_slots,
            v.weight.display_name()
        )
    }));

    lines.push("Weapons:".to_string());
    lines.extend(catalog.weapons().iter().map(|w| {
        format!(
            "  {:<4} {:<20} {:>3} cans  {} slots  {}",
            w.abbreviation,
            w.name,
            w.cost,
            w.build_slots,
            w.range.display_name()
        )
    }));

    lines.push("Upgrades:".to_string());
    lines.extend(catalog.upgrades().iter().map(|u| {
        format!(
            "  {:<4} {:<20} {:>3} cans  {} slots",
            u.abbreviation, u.name, u.cost, u.build_slots
        )
    }));

    lines
}
