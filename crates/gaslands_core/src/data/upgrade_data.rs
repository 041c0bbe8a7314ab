//! Vehicle upgrade structures for data-driven upgrade definitions.

use serde::{Deserialize, Serialize};

/// A single statistic change applied by an upgrade.
///
/// Every effect applies once per unit of the active upgrade's amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeEffect {
    /// Extra hull points.
    Armour {
        /// Hull points added.
        hull: i32,
    },
    /// Extra crew.
    Crew {
        /// Crew added.
        crew: i32,
    },
    /// Maximum gear change.
    MaxGear {
        /// Gear delta (may be negative).
        gear: i32,
    },
    /// Handling change.
    Handling {
        /// Handling delta (may be negative).
        handling: i32,
    },
}

impl UpgradeEffect {
    /// Hull contribution of this effect.
    #[must_use]
    pub const fn hull(&self) -> i32 {
        match self {
            Self::Armour { hull } => *hull,
            Self::Crew { .. } | Self::MaxGear { .. } | Self::Handling { .. } => 0,
        }
    }

    /// Crew contribution of this effect.
    #[must_use]
    pub const fn crew(&self) -> i32 {
        match self {
            Self::Crew { crew } => *crew,
            Self::Armour { .. } | Self::MaxGear { .. } | Self::Handling { .. } => 0,
        }
    }

    /// Max gear contribution of this effect.
    #[must_use]
    pub const fn gear(&self) -> i32 {
        match self {
            Self::MaxGear { gear } => *gear,
            Self::Armour { .. } | Self::Crew { .. } | Self::Handling { .. } => 0,
        }
    }

    /// Handling contribution of this effect.
    #[must_use]
    pub const fn handling(&self) -> i32 {
        match self {
            Self::Handling { handling } => *handling,
            Self::Armour { .. } | Self::Crew { .. } | Self::MaxGear { .. } => 0,
        }
    }
}

/// How many times an upgrade may be fitted to one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeQuantity {
    /// At most one instance.
    Single,
    /// Up to a per-vehicle limit (see [`crate::stats::upgrade_quantity_limit`]).
    Limited,
    /// No limit beyond build slots.
    Unlimited,
    /// One instance per facing direction.
    SingleEachFacing,
}

/// Data-driven vehicle upgrade definition.
///
/// # Example RON
///
/// ```ron
/// VehicleUpgrade(
///     name: "Tank Tracks",
///     abbreviation: "tt",
///     description: "-1 Max gear, +1 Handling",
///     effects: [MaxGear(gear: -1), Handling(handling: 1)],
///     build_slots: 1,
///     cost: 4,
///     quantity: Single,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleUpgrade {
    /// Display name. Matched against [`super::VehicleType::included_upgrades`].
    pub name: String,

    /// Unique short identifier used in roster tokens.
    pub abbreviation: String,

    /// Rules text.
    pub description: String,

    /// Statistic changes.
    #[serde(default)]
    pub effects: Vec<UpgradeEffect>,

    /// Build slots consumed per unit.
    pub build_slots: u32,

    /// Cost in cans per unit.
    pub cost: u32,

    /// Quantity policy.
    pub quantity: UpgradeQuantity,

    /// The upgrade is mounted on a chosen facing (front, rear or side).
    #[serde(default)]
    pub configurable_facing: bool,

    /// Number of uses before the upgrade is spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<u32>,
}

impl VehicleUpgrade {
    /// Sum of the hull contributions of all effects.
    #[must_use]
    pub fn hull_bonus(&self) -> i32 {
        self.effects.iter().map(UpgradeEffect::hull).sum()
    }

    /// Sum of the crew contributions of all effects.
    #[must_use]
    pub fn crew_bonus(&self) -> i32 {
        self.effects.iter().map(UpgradeEffect::crew).sum()
    }

    /// Sum of the max gear contributions of all effects.
    #[must_use]
    pub fn gear_bonus(&self) -> i32 {
        self.effects.iter().map(UpgradeEffect::gear).sum()
    }

    /// Sum of the handling contributions of all effects.
    #[must_use]
    pub fn handling_bonus(&self) -> i32 {
        self.effects.iter().map(UpgradeEffect::handling).sum()
    }
}
