//! Active vehicles: a catalog vehicle type with chosen weapons and upgrades.
//!
//! Edits never mutate in place. Every `with_*`/`without_*` method returns a
//! new [`ActiveVehicle`] so a team can swap the old value for the new one.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::data::{VehicleType, VehicleUpgrade, WeaponType};
use crate::facing::{next_exclusive_direction, possible_directions, Direction, WeaponFacing};
use crate::stats;

/// A weapon fitted to a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWeapon {
    /// Catalog weapon type.
    pub weapon_type: Arc<WeaponType>,
    /// Current arc of fire.
    pub facing: WeaponFacing,
}

impl ActiveWeapon {
    /// Fit a weapon with its initial facing.
    #[must_use]
    pub fn new(weapon_type: Arc<WeaponType>) -> Self {
        let facing = WeaponFacing::initial_for(&weapon_type);
        Self {
            weapon_type,
            facing,
        }
    }

    /// Fit a weapon with an explicit facing.
    #[must_use]
    pub const fn with_facing(weapon_type: Arc<WeaponType>, facing: WeaponFacing) -> Self {
        Self {
            weapon_type,
            facing,
        }
    }
}

/// An upgrade fitted to a vehicle, possibly several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVehicleUpgrade {
    /// Catalog upgrade.
    pub upgrade: Arc<VehicleUpgrade>,
    /// Number of times the upgrade is fitted (at least 1).
    pub amount: u32,
    /// Mounting direction, present iff the upgrade has a configurable facing.
    pub direction: Option<Direction>,
}

impl ActiveVehicleUpgrade {
    /// Fit a single instance, facing front when the upgrade is directional.
    #[must_use]
    pub fn new(upgrade: Arc<VehicleUpgrade>) -> Self {
        let direction = upgrade.configurable_facing.then_some(Direction::Front);
        Self {
            upgrade,
            amount: 1,
            direction,
        }
    }
}

/// Reasons a vehicle edit is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleEditError {
    /// No weapon or upgrade at the given position.
    IndexOutOfRange,
    /// Default weapons are fitted to every vehicle and cannot be added or removed.
    DefaultWeapon,
    /// Included upgrades come with the vehicle type and cannot be removed.
    IncludedUpgrade,
    /// The upgrade's quantity policy or the vehicle type forbids adding it.
    UpgradeNotAllowed,
    /// The upgrade has no configurable facing.
    NotConfigurable,
}

impl std::fmt::Display for VehicleEditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange => write!(f, "No item at that position"),
            Self::DefaultWeapon => write!(f, "Default weapons cannot be added or removed"),
            Self::IncludedUpgrade => write!(f, "Included upgrades cannot be removed"),
            Self::UpgradeNotAllowed => write!(f, "Upgrade cannot be added to this vehicle"),
            Self::NotConfigurable => write!(f, "Upgrade has no configurable facing"),
        }
    }
}

impl std::error::Error for VehicleEditError {}

/// A vehicle on a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVehicle {
    /// Catalog vehicle type.
    pub vehicle_type: Arc<VehicleType>,
    /// Display name.
    pub name: String,
    /// Fitted weapons, in display order.
    pub weapons: Vec<ActiveWeapon>,
    /// Fitted upgrades, in display order.
    pub upgrades: Vec<ActiveVehicleUpgrade>,
}

impl ActiveVehicle {
    /// Create a vehicle with the catalog's default weapons and the type's
    /// included upgrades.
    #[must_use]
    pub fn new(catalog: &Catalog, vehicle_type: Arc<VehicleType>, name: impl Into<String>) -> Self {
        let weapons = catalog
            .default_weapons()
            .map(|w| ActiveWeapon::new(Arc::clone(w)))
            .collect();
        let upgrades = catalog
            .included_upgrades(&vehicle_type)
            .map(|u| ActiveVehicleUpgrade::new(Arc::clone(u)))
            .collect();

        Self {
            vehicle_type,
            name: name.into(),
            weapons,
            upgrades,
        }
    }

    /// Abbreviation of the vehicle type.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.vehicle_type.abbreviation
    }

    /// Check if an upgrade on this vehicle comes free with its type.
    #[must_use]
    pub fn is_upgrade_included(&self, upgrade: &VehicleUpgrade) -> bool {
        self.vehicle_type.includes_upgrade(&upgrade.name)
    }

    /// Total amount of an upgrade across all of its instances.
    #[must_use]
    pub fn upgrade_amount(&self, upgrade: &VehicleUpgrade) -> u32 {
        self.upgrades
            .iter()
            .filter(|a| a.upgrade.abbreviation == upgrade.abbreviation)
            .map(|a| a.amount)
            .sum()
    }

    /// Rename the vehicle.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Fit a weapon with its initial facing.
    pub fn with_weapon(&self, weapon: &Arc<WeaponType>) -> Result<Self, VehicleEditError> {
        self.with_weapon_facing(weapon, WeaponFacing::initial_for(weapon))
    }

    /// Fit a weapon with an explicit facing.
    pub fn with_weapon_facing(
        &self,
        weapon: &Arc<WeaponType>,
        facing: WeaponFacing,
    ) -> Result<Self, VehicleEditError> {
        if weapon.is_default {
            return Err(VehicleEditError::DefaultWeapon);
        }

        let mut next = self.clone();
        next.weapons
            .push(ActiveWeapon::with_facing(Arc::clone(weapon), facing));
        Ok(next)
    }

    /// Remove the weapon at `index`.
    pub fn without_weapon(&self, index: usize) -> Result<Self, VehicleEditError> {
        let weapon = self
            .weapons
            .get(index)
            .ok_or(VehicleEditError::IndexOutOfRange)?;
        if weapon.weapon_type.is_default {
            return Err(VehicleEditError::DefaultWeapon);
        }

        let mut next = self.clone();
        next.weapons.remove(index);
        Ok(next)
    }

    /// Rotate the weapon at `index` to its next facing.
    ///
    /// Pinned facings (crew fired, dropped, turret mounted) stay as they are.
    pub fn with_weapon_rotated(&self, index: usize) -> Result<Self, VehicleEditError> {
        if index >= self.weapons.len() {
            return Err(VehicleEditError::IndexOutOfRange);
        }

        let mut next = self.clone();
        next.weapons[index].facing = next.weapons[index].facing.rotate();
        Ok(next)
    }

    /// Fit one more unit of an upgrade.
    ///
    /// Non-directional upgrades already on the vehicle have their amount
    /// raised; directional upgrades get a new instance facing the first
    /// free direction.
    pub fn with_upgrade(&self, upgrade: &Arc<VehicleUpgrade>) -> Result<Self, VehicleEditError> {
        let direction = if upgrade.configurable_facing {
            possible_directions(upgrade, &self.upgrades).first().copied()
        } else {
            None
        };
        self.with_upgrade_facing(upgrade, direction)
    }

    /// Fit one more unit of an upgrade, mounting directional upgrades on
    /// `direction`.
    ///
    /// `direction` is ignored for non-directional upgrades. A directional
    /// upgrade requires a direction that is still free.
    pub fn with_upgrade_facing(
        &self,
        upgrade: &Arc<VehicleUpgrade>,
        direction: Option<Direction>,
    ) -> Result<Self, VehicleEditError> {
        if !stats::can_add_upgrade(upgrade, self) {
            return Err(VehicleEditError::UpgradeNotAllowed);
        }

        let mut next = self.clone();

        if upgrade.configurable_facing {
            let direction = direction
                .filter(|d| possible_directions(upgrade, &self.upgrades).contains(d))
                .ok_or(VehicleEditError::UpgradeNotAllowed)?;
            next.upgrades.push(ActiveVehicleUpgrade {
                upgrade: Arc::clone(upgrade),
                amount: 1,
                direction: Some(direction),
            });
            return Ok(next);
        }

        match next
            .upgrades
            .iter_mut()
            .find(|a| a.upgrade.abbreviation == upgrade.abbreviation)
        {
            Some(existing) => existing.amount += 1,
            None => next
                .upgrades
                .push(ActiveVehicleUpgrade::new(Arc::clone(upgrade))),
        }
        Ok(next)
    }

    /// Remove one unit of the upgrade at `index`.
    ///
    /// The instance disappears once its amount reaches zero.
    pub fn without_upgrade(&self, index: usize) -> Result<Self, VehicleEditError> {
        let active = self
            .upgrades
            .get(index)
            .ok_or(VehicleEditError::IndexOutOfRange)?;
        if active.amount <= 1 && self.is_upgrade_included(&active.upgrade) {
            return Err(VehicleEditError::IncludedUpgrade);
        }

        let mut next = self.clone();
        if active.amount > 1 {
            next.upgrades[index].amount -= 1;
        } else {
            next.upgrades.remove(index);
        }
        Ok(next)
    }

    /// Turn the directional upgrade at `index` to the next free direction.
    ///
    /// A no-op when every other direction is taken.
    pub fn with_upgrade_rotated(&self, index: usize) -> Result<Self, VehicleEditError> {
        let active = self
            .upgrades
            .get(index)
            .ok_or(VehicleEditError::IndexOutOfRange)?;
        let current = active.direction.ok_or(VehicleEditError::NotConfigurable)?;

        let direction = next_exclusive_direction(current, &active.upgrade, &self.upgrades);
        let mut next = self.clone();
        next.upgrades[index].direction = Some(direction);
        Ok(next)
    }
}
