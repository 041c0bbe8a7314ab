//! Random team generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use gaslands_core::catalog::Catalog;
use gaslands_core::config::BuilderConfig;
use gaslands_core::team::{Team, TeamIntent};

/// Parameters for [`random_team`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomTeamOptions {
    /// Lowest cost target per vehicle.
    pub min: u32,
    /// Highest cost target per vehicle.
    pub max: u32,
    /// Number of vehicles to attempt.
    pub count: usize,
    /// RNG seed.
    pub seed: u64,
    /// Team name; the configured default when `None`.
    pub name: Option<String>,
}

/// Build a reproducible random team.
///
/// Vehicles that cannot be assembled within budget are skipped, so the team
/// may hold fewer than `count` vehicles.
#[must_use]
pub fn random_team(catalog: &Catalog, options: &RandomTeamOptions, config: &BuilderConfig) -> Team {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| config.default_team_name.clone());

    (0..options.count).fold(Team::named(name), |team, _| {
        team.apply(
            TeamIntent::AddRandomVehicleInRange {
                min: options.min,
                max: options.max,
            },
            catalog,
            &mut rng,
            config,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaslands_core::stats;
    use gaslands_test_utils::fixtures::catalog;

    fn options(seed: u64) -> RandomTeamOptions {
        RandomTeamOptions {
            min: 15,
            max: 30,
            count: 4,
            seed,
            name: None,
        }
    }

    #[test]
    fn test_same_seed_same_team() {
        let config = BuilderConfig::default();
        assert_eq!(
            random_team(catalog(), &options(8), &config),
            random_team(catalog(), &options(8), &config)
        );
    }

    #[test]
    fn test_vehicles_within_range_maximum() {
        let team = random_team(catalog(), &options(21), &BuilderConfig::default());
        assert_eq!(team.vehicles.len(), 4);
        assert_eq!(team.name, "New Team");
        for vehicle in &team.vehicles {
            assert!(stats::total_cost(vehicle) <= 30);
        }
    }

    #[test]
    fn test_unaffordable_range_gives_empty_team() {
        let options = RandomTeamOptions {
            min: 0,
            max: 2,
            count: 3,
            seed: 1,
            name: Some("Broke".to_string()),
        };
        let team = random_team(catalog(), &options, &BuilderConfig::default());
        assert_eq!(team.name, "Broke");
        assert!(team.vehicles.is_empty());
    }
}
