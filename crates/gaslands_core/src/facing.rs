//! Arc-of-fire model for weapons and directional upgrades.
//!
//! A [`WeaponFacing`] is a closed set of variants. Only
//! [`WeaponFacing::UserSelected`] can be rotated; the other variants are
//! pinned to a 360° arc.
//!
//! Directional upgrades (rams) are limited to one instance per direction,
//! which is what [`possible_directions`] and [`next_exclusive_direction`]
//! enforce.

use serde::{Deserialize, Serialize};

use crate::data::{VehicleUpgrade, WeaponType};
use crate::vehicle::ActiveVehicleUpgrade;

/// Arc-of-fire direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Front arc.
    Front,
    /// Rear arc.
    Rear,
    /// Side arc.
    Side,
    /// Full 360° arc.
    Turret,
}

impl Direction {
    /// Rotation order for user-selected weapon facings.
    pub const ROTATION: [Self; 4] = [Self::Front, Self::Rear, Self::Side, Self::Turret];

    /// Directions a directional upgrade can be mounted on.
    pub const MOUNTABLE: [Self; 3] = [Self::Front, Self::Rear, Self::Side];

    /// Next direction in rotation order, wrapping from 360° to front.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Front => Self::Rear,
            Self::Rear => Self::Side,
            Self::Side => Self::Turret,
            Self::Turret => Self::Front,
        }
    }

    /// Single-letter code used in roster tokens.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Front => 'f',
            Self::Rear => 'r',
            Self::Side => 's',
            Self::Turret => 't',
        }
    }

    /// Parse a single-letter direction code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'f' => Some(Self::Front),
            'r' => Some(Self::Rear),
            's' => Some(Self::Side),
            't' => Some(Self::Turret),
            _ => None,
        }
    }

    /// Label shown on vehicle cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
            Self::Side => "side",
            Self::Turret => "360°",
        }
    }
}

/// Orientation of a weapon's arc of fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponFacing {
    /// Chosen by the player; rotates through all four directions.
    ///
    /// `UserSelected(Direction::Turret)` is a turret-mounted weapon and
    /// costs three times the base price.
    UserSelected(Direction),
    /// Fixed turret mount, always 360°.
    TurretMounted,
    /// Fired by the crew, always 360°.
    CrewFired,
    /// Dropped behind the vehicle, always 360°.
    Dropped,
}

impl WeaponFacing {
    /// Facing given to a weapon when it is first fitted.
    #[must_use]
    pub fn initial_for(weapon: &WeaponType) -> Self {
        if weapon.is_crew_fired {
            Self::CrewFired
        } else if weapon.is_dropped() {
            Self::Dropped
        } else {
            Self::UserSelected(Direction::Front)
        }
    }

    /// Current arc-of-fire direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::UserSelected(direction) => *direction,
            Self::TurretMounted | Self::CrewFired | Self::Dropped => Direction::Turret,
        }
    }

    /// Whether the player may rotate this facing.
    #[must_use]
    pub const fn is_rotatable(&self) -> bool {
        matches!(self, Self::UserSelected(_))
    }

    /// Whether the weapon was turned into a paid 360° turret.
    #[must_use]
    pub const fn is_turret_mounted(&self) -> bool {
        matches!(self, Self::UserSelected(Direction::Turret))
    }

    /// Rotate to the next direction.
    ///
    /// Only user-selected facings move; every other variant is returned
    /// unchanged.
    #[must_use]
    pub const fn rotate(self) -> Self {
        match self {
            Self::UserSelected(direction) => Self::UserSelected(direction.next()),
            Self::TurretMounted | Self::CrewFired | Self::Dropped => self,
        }
    }

    /// Short code used in roster tokens (`u:f`, `t`, `c`, `d`).
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::UserSelected(direction) => format!("u:{}", direction.code()),
            Self::TurretMounted => "t".to_string(),
            Self::CrewFired => "c".to_string(),
            Self::Dropped => "d".to_string(),
        }
    }

    /// Parse a facing code.
    ///
    /// Parsing is lenient: an unknown type tag reads as user-selected, and a
    /// missing or unknown direction reads as front.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let mut chars = code.chars();
        match chars.next() {
            Some('t') => Self::TurretMounted,
            Some('c') => Self::CrewFired,
            Some('d') => Self::Dropped,
            _ => {
                let direction = chars
                    .nth(1)
                    .and_then(Direction::from_code)
                    .unwrap_or(Direction::Front);
                Self::UserSelected(direction)
            }
        }
    }
}

/// Directions still free for a directional upgrade.
///
/// Returns front, rear and side minus every direction already taken by an
/// active instance of the same upgrade.
#[must_use]
pub fn possible_directions(
    upgrade: &VehicleUpgrade,
    active: &[ActiveVehicleUpgrade],
) -> Vec<Direction> {
    let occupied: Vec<Direction> = active
        .iter()
        .filter(|a| a.upgrade.abbreviation == upgrade.abbreviation)
        .filter_map(|a| a.direction)
        .collect();

    Direction::MOUNTABLE
        .into_iter()
        .filter(|direction| !occupied.contains(direction))
        .collect()
}

/// Next free direction for an instance currently facing `current`.
///
/// Walks front, rear, side starting after `current` and returns the first
/// direction not occupied by another instance. When every direction is
/// taken the current one is returned unchanged.
#[must_use]
pub fn next_exclusive_direction(
    current: Direction,
    upgrade: &VehicleUpgrade,
    active: &[ActiveVehicleUpgrade],
) -> Direction {
    let free = possible_directions(upgrade, active);
    let start = Direction::MOUNTABLE
        .iter()
        .position(|&d| d == current)
        .unwrap_or(Direction::MOUNTABLE.len() - 1);

    (1..=Direction::MOUNTABLE.len())
        .map(|offset| Direction::MOUNTABLE[(start + offset) % Direction::MOUNTABLE.len()])
        .find(|direction| free.contains(direction))
        .unwrap_or(current)
}
