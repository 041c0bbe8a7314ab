//! Data structures for catalog configuration.
//!
//! This module contains pure data structures that define vehicle types,
//! weapons, and upgrades. All structs are designed to be deserialized
//! from RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by [`crate::catalog`].

mod catalog_data;
mod upgrade_data;
mod vehicle_data;
mod weapon_data;

pub use catalog_data::CatalogData;
pub use upgrade_data::{UpgradeEffect, UpgradeQuantity, VehicleUpgrade};
pub use vehicle_data::{VehicleType, VehicleWeight};
pub use weapon_data::{WeaponRange, WeaponType};
