//! Property-based tests for the roster core.

use gaslands_core::codec::RosterCodec;
use gaslands_core::random::{random_vehicle, AssemblyConfig, AssemblyError};
use gaslands_core::stats;
use gaslands_test_utils::fixtures::catalog;
use gaslands_test_utils::strategies::{arb_cost_target, arb_team, arb_vehicle};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_token_round_trip(team in arb_team(4)) {
        let codec = RosterCodec::new(catalog());
        let token = codec.encode(&team).expect("encodes");
        prop_assert_eq!(codec.decode(&token), team);
    }

    #[test]
    fn prop_token_is_url_safe(team in arb_team(3)) {
        let token = RosterCodec::new(catalog()).encode(&team).expect("encodes");
        prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn prop_adding_weapon_never_lowers_cost(vehicle in arb_vehicle(), index in any::<usize>()) {
        let weapons = catalog().weapons();
        let weapon = &weapons[index % weapons.len()];
        if let Ok(armed) = vehicle.with_weapon(weapon) {
            prop_assert!(stats::total_cost(&armed) >= stats::total_cost(&vehicle));
        }
    }

    #[test]
    fn prop_adding_upgrade_never_lowers_cost(vehicle in arb_vehicle(), index in any::<usize>()) {
        let upgrades = catalog().upgrades();
        let upgrade = &upgrades[index % upgrades.len()];
        if let Ok(upgraded) = vehicle.with_upgrade(upgrade) {
            prop_assert!(stats::total_cost(&upgraded) >= stats::total_cost(&vehicle));
        }
    }

    #[test]
    fn prop_max_gear_in_range(vehicle in arb_vehicle()) {
        let gear = stats::max_gear(&vehicle);
        prop_assert!((stats::MIN_GEAR..=stats::MAX_GEAR).contains(&gear));
    }

    #[test]
    fn prop_random_vehicle_within_limits(target in arb_cost_target(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let vehicle = match random_vehicle(catalog(), target, &mut rng, &AssemblyConfig::default()) {
            Ok(vehicle) => vehicle,
            Err(AssemblyError::Exhausted { vehicle, .. }) => *vehicle,
            Err(AssemblyError::NoVehicleWithinBudget { .. }) => {
                let cheapest = catalog().vehicles().iter().map(|v| v.cost).min();
                prop_assert!(cheapest.map_or(true, |c| c > target));
                return Ok(());
            }
        };
        prop_assert!(stats::total_cost(&vehicle) <= target);
        prop_assert!(stats::build_slots_in_use(&vehicle) <= vehicle.vehicle_type.build_slots);
    }
}
