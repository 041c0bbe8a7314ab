//! Condensed roster shape shared by every token format.
//!
//! Catalog entries are reduced to their abbreviations and facings to their
//! short codes. Vehicles, weapons and upgrades are positional tuples so
//! the JSON form stays as small as the links it has to read. Trailing
//! tuple fields are optional: old links carry only
//! `[vehicle, [[weapon, facing]]]`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::data::{UpgradeQuantity, VehicleUpgrade};
use crate::facing::{possible_directions, Direction, WeaponFacing};
use crate::stats;
use crate::team::{Team, INITIAL_TEAM_NAME};
use crate::vehicle::{ActiveVehicle, ActiveVehicleUpgrade, ActiveWeapon};

/// Most units of an unlimited upgrade a token may carry.
pub const MAX_DECODED_AMOUNT: u32 = 99;

fn initial_team_name() -> String {
    INITIAL_TEAM_NAME.to_string()
}

/// Team as stored in a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedTeam {
    /// Team name.
    #[serde(default = "initial_team_name")]
    pub name: String,
    /// Vehicles in display order.
    #[serde(default)]
    pub vehicles: Vec<CondensedVehicle>,
}

/// `(type abbreviation, weapons, upgrades, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedVehicle(
    pub String,
    pub Vec<CondensedWeapon>,
    #[serde(default)] pub Vec<CondensedUpgrade>,
    #[serde(default)] pub Option<String>,
);

/// `(weapon abbreviation, facing code)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedWeapon(pub String, #[serde(default)] pub String);

/// `(upgrade abbreviation, amount, direction code)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedUpgrade(
    pub String,
    #[serde(default)] pub Option<u32>,
    #[serde(default)] pub Option<String>,
);

impl From<&Team> for CondensedTeam {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            vehicles: team.vehicles.iter().map(CondensedVehicle::from).collect(),
        }
    }
}

impl From<&ActiveVehicle> for CondensedVehicle {
    fn from(vehicle: &ActiveVehicle) -> Self {
        let weapons = vehicle
            .weapons
            .iter()
            .map(|w| CondensedWeapon(w.weapon_type.abbreviation.clone(), w.facing.code()))
            .collect();
        let upgrades = vehicle
            .upgrades
            .iter()
            .map(|u| {
                CondensedUpgrade(
                    u.upgrade.abbreviation.clone(),
                    Some(u.amount),
                    u.direction.map(|d| d.code().to_string()),
                )
            })
            .collect();

        Self(
            vehicle.vehicle_type.abbreviation.clone(),
            weapons,
            upgrades,
            Some(vehicle.name.clone()),
        )
    }
}

impl CondensedTeam {
    /// Rebuild a team against `catalog`.
    ///
    /// Unknown abbreviations are dropped, along with whatever they carried.
    /// Missing default weapons and included upgrades are put back. Upgrade
    /// amounts are raised to at least one and cut to what the upgrade's
    /// quantity policy allows; directional upgrades keep one instance per
    /// free direction.
    #[must_use]
    pub fn hydrate(&self, catalog: &Catalog) -> Team {
        Team {
            name: self.name.clone(),
            vehicles: self
                .vehicles
                .iter()
                .filter_map(|v| v.hydrate(catalog))
                .collect(),
        }
    }
}

impl CondensedVehicle {
    fn hydrate(&self, catalog: &Catalog) -> Option<ActiveVehicle> {
        let Self(abbreviation, weapons, upgrades, name) = self;

        let Some(vehicle_type) = catalog.vehicle(abbreviation) else {
            tracing::debug!("Dropping vehicle with unknown type '{}'", abbreviation);
            return None;
        };

        let mut weapons: Vec<ActiveWeapon> = weapons
            .iter()
            .filter_map(|CondensedWeapon(abbreviation, facing)| {
                let weapon = catalog.weapon(abbreviation);
                if weapon.is_none() {
                    tracing::debug!("Dropping unknown weapon '{}'", abbreviation);
                }
                weapon.map(|w| ActiveWeapon::with_facing(Arc::clone(w), WeaponFacing::from_code(facing)))
            })
            .collect();

        let missing_defaults: Vec<ActiveWeapon> = catalog
            .default_weapons()
            .filter(|d| !weapons.iter().any(|w| w.weapon_type.abbreviation == d.abbreviation))
            .map(|d| ActiveWeapon::new(Arc::clone(d)))
            .collect();
        weapons.splice(0..0, missing_defaults);

        let mut vehicle = ActiveVehicle {
            vehicle_type: Arc::clone(vehicle_type),
            name: name.clone().unwrap_or_else(|| vehicle_type.name.clone()),
            weapons,
            upgrades: Vec::new(),
        };

        for CondensedUpgrade(abbreviation, amount, direction) in upgrades {
            let Some(upgrade) = catalog.upgrade(abbreviation) else {
                tracing::debug!("Dropping unknown upgrade '{}'", abbreviation);
                continue;
            };
            fit_decoded_upgrade(
                &mut vehicle,
                upgrade,
                amount.unwrap_or(1).max(1),
                direction.as_deref(),
            );
        }

        let missing_included: Vec<ActiveVehicleUpgrade> = catalog
            .included_upgrades(vehicle_type)
            .filter(|i| vehicle.upgrade_amount(i) == 0)
            .map(|i| ActiveVehicleUpgrade::new(Arc::clone(i)))
            .collect();
        vehicle.upgrades.splice(0..0, missing_included);

        Some(vehicle)
    }
}

/// Fit a decoded upgrade under the same rules as the edit API.
///
/// Directional upgrades take the requested direction when it is free,
/// otherwise the first free one, one instance each. Other upgrades merge
/// into the existing instance with their amount cut to what the quantity
/// policy leaves room for. Whatever does not fit is dropped.
fn fit_decoded_upgrade(
    vehicle: &mut ActiveVehicle,
    upgrade: &Arc<VehicleUpgrade>,
    amount: u32,
    direction: Option<&str>,
) {
    if !stats::can_add_upgrade(upgrade, vehicle) {
        tracing::debug!(
            "Dropping '{}': not allowed on {}",
            upgrade.abbreviation,
            vehicle.vehicle_type.name
        );
        return;
    }

    if upgrade.configurable_facing {
        let free = possible_directions(upgrade, &vehicle.upgrades);
        let requested = direction
            .and_then(|code| code.chars().next())
            .and_then(Direction::from_code);
        let Some(chosen) = requested
            .filter(|d| free.contains(d))
            .or_else(|| free.first().copied())
        else {
            tracing::debug!("Dropping '{}': no free direction", upgrade.abbreviation);
            return;
        };
        if let Some(taken) = requested.filter(|&d| d != chosen) {
            tracing::debug!(
                "Moving '{}' from {} to {}",
                upgrade.abbreviation,
                taken.label(),
                chosen.label()
            );
        }
        vehicle.upgrades.push(ActiveVehicleUpgrade {
            upgrade: Arc::clone(upgrade),
            amount: 1,
            direction: Some(chosen),
        });
        return;
    }

    let ceiling = match upgrade.quantity {
        UpgradeQuantity::Single | UpgradeQuantity::SingleEachFacing => 1,
        UpgradeQuantity::Limited => stats::upgrade_quantity_limit(upgrade, vehicle),
        UpgradeQuantity::Unlimited => MAX_DECODED_AMOUNT,
    };
    let fitted = amount.min(ceiling.saturating_sub(vehicle.upgrade_amount(upgrade)));
    if fitted < amount {
        tracing::debug!(
            "Cutting '{}' from {} to {}",
            upgrade.abbreviation,
            amount,
            fitted
        );
    }
    if fitted == 0 {
        return;
    }

    match vehicle
        .upgrades
        .iter_mut()
        .find(|a| a.upgrade.abbreviation == upgrade.abbreviation)
    {
        Some(existing) => existing.amount += fitted,
        None => vehicle.upgrades.push(ActiveVehicleUpgrade {
            upgrade: Arc::clone(upgrade),
            amount: fitted,
            direction: None,
        }),
    }
}
