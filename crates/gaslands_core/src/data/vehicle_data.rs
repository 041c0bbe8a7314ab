//! Vehicle type structures for data-driven vehicle definitions.

use serde::{Deserialize, Serialize};

/// Weight class of a vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleWeight {
    /// Buggies, bikes, drag racers.
    Lightweight,
    /// Cars, trucks, ambulances.
    Middleweight,
    /// Heavy trucks, buses, war rigs.
    Heavyweight,
}

impl VehicleWeight {
    /// Get the display name for this weight class.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Lightweight => "Lightweight",
            Self::Middleweight => "Middleweight",
            Self::Heavyweight => "Heavyweight",
        }
    }
}

/// Data-driven vehicle type definition.
///
/// Holds the base statistics that every active vehicle of this type
/// starts from before weapons and upgrades are applied.
///
/// # Example RON
///
/// ```ron
/// VehicleType(
///     name: "Buggy",
///     abbreviation: "bg",
///     weight: Lightweight,
///     hull: 6,
///     handling: 4,
///     max_gear: 6,
///     crew: 2,
///     build_slots: 2,
///     cost: 6,
///     special_rule: Some("Roll Cage"),
///     included_upgrades: ["Roll Cage"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleType {
    /// Display name.
    pub name: String,

    /// Unique short identifier used in roster tokens.
    pub abbreviation: String,

    /// Weight class.
    pub weight: VehicleWeight,

    /// Base hull points.
    pub hull: i32,

    /// Base handling.
    pub handling: i32,

    /// Base maximum gear.
    pub max_gear: i32,

    /// Base crew.
    pub crew: i32,

    /// Build slot capacity.
    pub build_slots: u32,

    /// Cost in cans.
    pub cost: u32,

    /// Special rule text printed on the vehicle card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_rule: Option<String>,

    /// Upgrade names fitted to every vehicle of this type at no cost.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_upgrades: Vec<String>,

    /// Upgrade names this vehicle type may never take.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden_upgrades: Vec<String>,
}

impl VehicleType {
    /// Check if an upgrade (by name) comes free with this vehicle type.
    #[must_use]
    pub fn includes_upgrade(&self, upgrade_name: &str) -> bool {
        self.included_upgrades.iter().any(|u| u == upgrade_name)
    }

    /// Check if an upgrade (by name) is forbidden for this vehicle type.
    #[must_use]
    pub fn forbids_upgrade(&self, upgrade_name: &str) -> bool {
        self.forbidden_upgrades.iter().any(|u| u == upgrade_name)
    }
}
