//! # Gaslands Core
//!
//! Vehicle roster builder for the Gaslands tabletop game.
//!
//! This crate contains the roster logic only:
//! - No rendering
//! - No ambient IO (catalog and config files are loaded explicitly)
//! - No ambient randomness (callers pass in an [`rand::Rng`])
//! - No wall clock (callers pass in an [`std::time::Instant`])
//!
//! Every edit produces a new value, so an undo history is a `Vec<Team>`.
//!
//! ## Crate Structure
//!
//! - [`data`] - Serialisable catalog definitions
//! - [`catalog`] - Indexed catalog with the embedded default data
//! - [`facing`] - Arc-of-fire model
//! - [`vehicle`] - Active vehicles and their edit operations
//! - [`stats`] - Derived statistics
//! - [`random`] - Random vehicle assembly
//! - [`team`] - Teams and edit intents
//! - [`codec`] - Roster tokens
//! - [`persistence`] - Token store port and debounced session
//! - [`config`] - Builder configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod codec;
pub mod config;
pub mod data;
pub mod error;
pub mod facing;
pub mod persistence;
pub mod random;
pub mod stats;
pub mod team;
pub mod vehicle;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::codec::{CompactFormat, JsonFormat, RosterCodec, RosterFormat};
    pub use crate::config::BuilderConfig;
    pub use crate::data::{
        UpgradeEffect, UpgradeQuantity, VehicleType, VehicleUpgrade, VehicleWeight, WeaponRange,
        WeaponType,
    };
    pub use crate::error::{Result, RosterError};
    pub use crate::facing::{Direction, WeaponFacing};
    pub use crate::persistence::{MemoryTokenStore, RosterSession, TokenStore};
    pub use crate::random::{AssemblyConfig, AssemblyError};
    pub use crate::stats::VehicleStats;
    pub use crate::team::{Team, TeamIntent};
    pub use crate::vehicle::{ActiveVehicle, ActiveVehicleUpgrade, ActiveWeapon, VehicleEditError};
}
