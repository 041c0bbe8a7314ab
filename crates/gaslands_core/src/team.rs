//! Teams and the intents that edit them.

use std::sync::Arc;

use rand::Rng;

use crate::catalog::Catalog;
use crate::config::BuilderConfig;
use crate::data::VehicleType;
use crate::random::{random_vehicle, random_vehicle_in_range, AssemblyError};
use crate::stats;
use crate::vehicle::ActiveVehicle;

/// Name of a team nobody has renamed yet.
pub const INITIAL_TEAM_NAME: &str = "New Team";

/// A roster of vehicles. The root persisted entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Display name.
    pub name: String,
    /// Vehicles in display order.
    pub vehicles: Vec<ActiveVehicle>,
}

impl Default for Team {
    fn default() -> Self {
        Self::initial()
    }
}

/// An edit requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamIntent {
    /// Append a vehicle.
    AddVehicle(ActiveVehicle),
    /// Remove the vehicle at `index`.
    RemoveVehicle {
        /// Position in the team.
        index: usize,
    },
    /// Replace the vehicle at `index`.
    UpdateVehicle {
        /// Position in the team.
        index: usize,
        /// Replacement vehicle.
        vehicle: ActiveVehicle,
    },
    /// Rename the team.
    RenameTeam(String),
    /// Rename the vehicle at `index`.
    RenameVehicle {
        /// Position in the team.
        index: usize,
        /// New display name.
        name: String,
    },
    /// Append a random vehicle costing at most `cost`.
    AddRandomVehicle {
        /// Cost target in cans.
        cost: u32,
    },
    /// Append a random vehicle with a cost target drawn from `[min, max]`.
    AddRandomVehicleInRange {
        /// Lowest cost target.
        min: u32,
        /// Highest cost target.
        max: u32,
    },
}

impl Team {
    /// An empty team called "New Team".
    #[must_use]
    pub fn initial() -> Self {
        Self::named(INITIAL_TEAM_NAME)
    }

    /// An empty team with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vehicles: Vec::new(),
        }
    }

    /// Total cost of every vehicle.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        stats::team_total_cost(self)
    }

    /// Produce the team that results from applying `intent`.
    ///
    /// Intents that point past the end of the vehicle list leave the team
    /// unchanged.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(
        &self,
        intent: TeamIntent,
        catalog: &Catalog,
        rng: &mut R,
        config: &BuilderConfig,
    ) -> Self {
        let mut next = self.clone();

        match intent {
            TeamIntent::AddVehicle(vehicle) => next.vehicles.push(vehicle),
            TeamIntent::RemoveVehicle { index } => {
                if index < next.vehicles.len() {
                    next.vehicles.remove(index);
                } else {
                    tracing::debug!("Ignoring removal of vehicle {}: out of range", index);
                }
            }
            TeamIntent::UpdateVehicle { index, vehicle } => match next.vehicles.get_mut(index) {
                Some(slot) => *slot = vehicle,
                None => tracing::debug!("Ignoring update of vehicle {}: out of range", index),
            },
            TeamIntent::RenameTeam(name) => next.name = name,
            TeamIntent::RenameVehicle { index, name } => match next.vehicles.get_mut(index) {
                Some(slot) => slot.name = name,
                None => tracing::debug!("Ignoring rename of vehicle {}: out of range", index),
            },
            TeamIntent::AddRandomVehicle { cost } => {
                let result = random_vehicle(catalog, cost, rng, &config.assembly);
                next.push_random(result);
            }
            TeamIntent::AddRandomVehicleInRange { min, max } => {
                let result = random_vehicle_in_range(catalog, min, max, rng, &config.assembly);
                next.push_random(result);
            }
        }

        next
    }

    fn push_random(&mut self, result: Result<ActiveVehicle, AssemblyError>) {
        match result {
            Ok(vehicle) => self.vehicles.push(vehicle),
            Err(AssemblyError::Exhausted {
                vehicle,
                target,
                attempts,
            }) => {
                tracing::warn!(
                    "Random {} stopped at {} of {} cans after {} attempts",
                    vehicle.vehicle_type.name,
                    stats::total_cost(&vehicle),
                    target,
                    attempts
                );
                self.vehicles.push(*vehicle);
            }
            Err(error @ AssemblyError::NoVehicleWithinBudget { .. }) => {
                tracing::warn!("Random vehicle not added: {}", error);
            }
        }
    }

    /// Add a fresh vehicle of the given type, named after the type.
    #[must_use]
    pub fn with_new_vehicle(&self, catalog: &Catalog, vehicle_type: &Arc<VehicleType>) -> Self {
        let mut next = self.clone();
        next.vehicles.push(ActiveVehicle::new(
            catalog,
            Arc::clone(vehicle_type),
            vehicle_type.name.clone(),
        ));
        next
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin().expect("builtin catalog should load")
    }

    fn car() -> ActiveVehicle {
        let catalog = catalog();
        ActiveVehicle::new(catalog, Arc::clone(catalog.vehicle("c").expect("car")), "Car")
    }

    fn apply(team: &Team, intent: TeamIntent) -> Team {
        let mut rng = StdRng::seed_from_u64(0);
        team.apply(intent, catalog(), &mut rng, &BuilderConfig::default())
    }

    #[test]
    fn test_initial_team() {
        let team = Team::initial();
        assert_eq!(team.name, "New Team");
        assert!(team.vehicles.is_empty());
        assert_eq!(team.total_cost(), 0);
    }

    #[test]
    fn test_add_and_remove_vehicle() {
        let team = apply(&Team::initial(), TeamIntent::AddVehicle(car()));
        assert_eq!(team.vehicles.len(), 1);

        let team = apply(&team, TeamIntent::RemoveVehicle { index: 0 });
        assert!(team.vehicles.is_empty());
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let original = Team::initial();
        let _ = apply(&original, TeamIntent::AddVehicle(car()));
        assert!(original.vehicles.is_empty());
    }

    #[test]
    fn test_out_of_range_intents_are_ignored() {
        let team = apply(&Team::initial(), TeamIntent::AddVehicle(car()));
        for intent in [
            TeamIntent::RemoveVehicle { index: 3 },
            TeamIntent::UpdateVehicle {
                index: 3,
                vehicle: car(),
            },
            TeamIntent::RenameVehicle {
                index: 3,
                name: "Nope".to_string(),
            },
        ] {
            assert_eq!(apply(&team, intent), team);
        }
    }

    #[test]
    fn test_rename_team_and_vehicle() {
        let team = apply(&Team::initial(), TeamIntent::AddVehicle(car()));
        let team = apply(&team, TeamIntent::RenameTeam("Road Warriors".to_string()));
        let team = apply(
            &team,
            TeamIntent::RenameVehicle {
                index: 0,
                name: "Interceptor".to_string(),
            },
        );
        assert_eq!(team.name, "Road Warriors");
        assert_eq!(team.vehicles[0].name, "Interceptor");
    }

    #[test]
    fn test_update_vehicle() {
        let team = apply(&Team::initial(), TeamIntent::AddVehicle(car()));
        let armed = car()
            .with_weapon(catalog().weapon("mg").expect("machine gun"))
            .expect("fits");
        let team = apply(
            &team,
            TeamIntent::UpdateVehicle {
                index: 0,
                vehicle: armed.clone(),
            },
        );
        assert_eq!(team.vehicles[0], armed);
    }

    #[test]
    fn test_random_vehicle_intents() {
        let team = apply(&Team::initial(), TeamIntent::AddRandomVehicle { cost: 30 });
        assert_eq!(team.vehicles.len(), 1);
        assert!(team.total_cost() <= 30);

        let team = apply(&team, TeamIntent::AddRandomVehicleInRange { min: 10, max: 20 });
        assert_eq!(team.vehicles.len(), 2);
    }

    #[test]
    fn test_unaffordable_random_vehicle_leaves_team_unchanged() {
        let team = apply(&Team::initial(), TeamIntent::AddRandomVehicle { cost: 1 });
        assert!(team.vehicles.is_empty());
    }

    #[test]
    fn test_with_new_vehicle_uses_type_name() {
        let catalog = catalog();
        let team = Team::initial().with_new_vehicle(catalog, catalog.vehicle("bg").expect("buggy"));
        assert_eq!(team.vehicles[0].name, "Buggy");
        assert_eq!(team.total_cost(), 6);
    }
}
