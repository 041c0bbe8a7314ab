//! Weapon type structures for data-driven weapon definitions.

use serde::{Deserialize, Serialize};

/// Range class of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponRange {
    /// Short range template.
    Short,
    /// Medium range template.
    Medium,
    /// Double-length medium template.
    Double,
    /// Long range template.
    Long,
    /// Dropped behind the vehicle (mines, oil slicks).
    Dropped,
}

impl WeaponRange {
    /// Get the display name for this range class.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Double => "Double",
            Self::Long => "Long",
            Self::Dropped => "Dropped",
        }
    }
}

/// Data-driven weapon definition.
///
/// # Example RON
///
/// ```ron
/// WeaponType(
///     name: "Handgun",
///     abbreviation: "hg",
///     range: Medium,
///     attack_dice: 1,
///     special_rules: ["Crew Fired"],
///     build_slots: 0,
///     cost: 0,
///     is_default: true,
///     is_crew_fired: true,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponType {
    /// Display name.
    pub name: String,

    /// Unique short identifier used in roster tokens.
    pub abbreviation: String,

    /// Range class.
    pub range: WeaponRange,

    /// Number of attack dice.
    pub attack_dice: u32,

    /// Special rule tags.
    #[serde(default)]
    pub special_rules: Vec<String>,

    /// Build slots consumed.
    pub build_slots: u32,

    /// Cost in cans.
    pub cost: u32,

    /// Fitted to every vehicle for free and cannot be removed.
    #[serde(default)]
    pub is_default: bool,

    /// Fired by the crew, always covering a 360° arc.
    #[serde(default)]
    pub is_crew_fired: bool,

    /// Number of uses before the weapon is spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<u32>,

    /// Extra rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeaponType {
    /// Check if the weapon is placed on the table rather than fired.
    #[must_use]
    pub fn is_dropped(&self) -> bool {
        self.range == WeaponRange::Dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_ron_with_defaults() {
        let weapon: WeaponType = ron::from_str(
            r#"WeaponType(
                name: "Mines",
                abbreviation: "mn",
                range: Dropped,
                attack_dice: 4,
                special_rules: ["Blast"],
                build_slots: 1,
                cost: 1,
                ammo: Some(3),
            )"#,
        )
        .expect("valid RON");

        assert!(weapon.is_dropped());
        assert!(!weapon.is_default);
        assert!(!weapon.is_crew_fired);
        assert_eq!(weapon.ammo, Some(3));
        assert_eq!(weapon.special_rules, vec!["Blast".to_string()]);
    }
}
