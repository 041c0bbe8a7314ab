//! Random vehicle assembly.
//!
//! Fills a vehicle with weapons and upgrades until it reaches a cost
//! target, never exceeding the target or the vehicle's build slots. The
//! generator is generic over [`Rng`]; seed a
//! [`StdRng`](rand::rngs::StdRng) for reproducible output.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::data::{VehicleType, VehicleUpgrade, WeaponType};
use crate::facing::{possible_directions, Direction, WeaponFacing};
use crate::stats::{can_add_upgrade, remaining_build_slots, total_cost};
use crate::vehicle::ActiveVehicle;

/// Tuning for the random assembly loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Iterations allowed before giving up on reaching the target.
    pub max_attempts: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self { max_attempts: 256 }
    }
}

/// Reasons random assembly stops short of a finished vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// Every vehicle type costs more than the target.
    #[error("No vehicle type costs {target} cans or less")]
    NoVehicleWithinBudget {
        /// Requested cost target.
        target: u32,
    },

    /// Nothing else fits, or the attempt budget ran out, before the target
    /// was reached. The partial vehicle is still valid.
    #[error("Stopped short of {target} cans after {attempts} attempts")]
    Exhausted {
        /// The vehicle as assembled so far.
        vehicle: Box<ActiveVehicle>,
        /// Requested cost target.
        target: u32,
        /// Iterations spent.
        attempts: usize,
    },
}

/// Facing for a randomly fitted weapon.
fn random_weapon_facing<R: Rng + ?Sized>(weapon: &WeaponType, rng: &mut R) -> WeaponFacing {
    match WeaponFacing::initial_for(weapon) {
        WeaponFacing::UserSelected(_) => {
            let direction = Direction::MOUNTABLE
                .choose(rng)
                .copied()
                .unwrap_or(Direction::Front);
            WeaponFacing::UserSelected(direction)
        }
        pinned => pinned,
    }
}

fn fitting_weapons<'a>(
    catalog: &'a Catalog,
    remaining_cost: u32,
    remaining_slots: u32,
) -> Vec<&'a Arc<WeaponType>> {
    catalog
        .weapons()
        .iter()
        .filter(|w| !w.is_default && w.cost <= remaining_cost && w.build_slots <= remaining_slots)
        .collect()
}

fn fitting_upgrades<'a>(
    catalog: &'a Catalog,
    vehicle: &ActiveVehicle,
    remaining_cost: u32,
    remaining_slots: u32,
) -> Vec<&'a Arc<VehicleUpgrade>> {
    catalog
        .upgrades()
        .iter()
        .filter(|u| {
            u.cost <= remaining_cost
                && u.build_slots <= remaining_slots
                && can_add_upgrade(u, vehicle)
        })
        .collect()
}

/// Add one random weapon or upgrade, or return the vehicle unchanged when
/// the chosen kind has nothing that fits.
fn fit_one<R: Rng + ?Sized>(
    vehicle: ActiveVehicle,
    weapons: &[&Arc<WeaponType>],
    upgrades: &[&Arc<VehicleUpgrade>],
    rng: &mut R,
) -> ActiveVehicle {
    if rng.gen_bool(0.5) {
        let Some(weapon) = weapons.choose(rng) else {
            return vehicle;
        };
        let facing = random_weapon_facing(weapon, rng);
        match vehicle.with_weapon_facing(weapon, facing) {
            Ok(next) => next,
            Err(error) => {
                tracing::debug!("Skipping weapon '{}': {}", weapon.abbreviation, error);
                vehicle
            }
        }
    } else {
        let Some(upgrade) = upgrades.choose(rng) else {
            return vehicle;
        };
        let direction = if upgrade.configurable_facing {
            possible_directions(upgrade, &vehicle.upgrades)
                .choose(rng)
                .copied()
        } else {
            None
        };
        match vehicle.with_upgrade_facing(upgrade, direction) {
            Ok(next) => next,
            Err(error) => {
                tracing::debug!("Skipping upgrade '{}': {}", upgrade.abbreviation, error);
                vehicle
            }
        }
    }
}

/// Assemble a random vehicle costing at most `target` cans.
///
/// The vehicle type is chosen uniformly among types the target can afford.
/// Weapons and upgrades are then added one at a time, each picked uniformly
/// among entries that fit the remaining budget and build slots.
///
/// # Errors
///
/// Returns [`AssemblyError::NoVehicleWithinBudget`] if no vehicle type is
/// affordable, and [`AssemblyError::Exhausted`] with the partial vehicle if
/// the target cannot be reached.
pub fn random_vehicle<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: u32,
    rng: &mut R,
    config: &AssemblyConfig,
) -> Result<ActiveVehicle, AssemblyError> {
    let affordable: Vec<&Arc<VehicleType>> = catalog
        .vehicles()
        .iter()
        .filter(|v| v.cost <= target)
        .collect();
    let vehicle_type = affordable
        .choose(rng)
        .ok_or(AssemblyError::NoVehicleWithinBudget { target })?;

    let mut vehicle = ActiveVehicle::new(catalog, Arc::clone(vehicle_type), vehicle_type.name.clone());
    let mut attempts = 0;

    loop {
        let cost = total_cost(&vehicle);
        if cost >= target {
            return Ok(vehicle);
        }

        let remaining_cost = target - cost;
        let remaining_slots = remaining_build_slots(&vehicle);
        let weapons = fitting_weapons(catalog, remaining_cost, remaining_slots);
        let upgrades = fitting_upgrades(catalog, &vehicle, remaining_cost, remaining_slots);

        if (weapons.is_empty() && upgrades.is_empty()) || attempts >= config.max_attempts {
            return Err(AssemblyError::Exhausted {
                vehicle: Box::new(vehicle),
                target,
                attempts,
            });
        }

        attempts += 1;
        vehicle = fit_one(vehicle, &weapons, &upgrades, rng);
    }
}

/// Assemble a random vehicle with a target drawn uniformly from
/// `[min, max]`.
///
/// # Errors
///
/// Same as [`random_vehicle`].
pub fn random_vehicle_in_range<R: Rng + ?Sized>(
    catalog: &Catalog,
    min: u32,
    max: u32,
    rng: &mut R,
    config: &AssemblyConfig,
) -> Result<ActiveVehicle, AssemblyError> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let target = rng.gen_range(low..=high);
    random_vehicle(catalog, target, rng, config)
}
