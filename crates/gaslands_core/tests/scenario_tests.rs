//! End-to-end roster building scenarios.
//!
//! Each test drives the public API the way the builder front end does:
//! intents against a team, then derived stats and the token.

use gaslands_core::config::BuilderConfig;
use gaslands_core::facing::{Direction, WeaponFacing};
use gaslands_core::stats::{self, VehicleStats};
use gaslands_core::team::{Team, TeamIntent};
use gaslands_core::vehicle::VehicleEditError;
use gaslands_test_utils::fixtures::{catalog, upgrade, vehicle, weapon};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn apply(team: &Team, intent: TeamIntent) -> Team {
    let mut rng = StdRng::seed_from_u64(99);
    team.apply(intent, catalog(), &mut rng, &BuilderConfig::default())
}

// ==========================================================================
// Pricing rules
// ==========================================================================

#[test]
fn test_buggy_roll_cage_is_free() {
    let team = apply(&Team::initial(), TeamIntent::AddVehicle(vehicle("bg", "Dusty")));
    assert_eq!(team.total_cost(), 6);
    assert_eq!(
        team.vehicles[0].upgrades[0].upgrade.name,
        "Roll Cage"
    );
}

#[test]
fn test_turret_rotation_triples_cost() {
    let mut car = vehicle("c", "Gunner")
        .with_weapon(&weapon("hmg"))
        .expect("fits");
    let mut costs = vec![stats::total_cost(&car)];
    for _ in 0..4 {
        car = car.with_weapon_rotated(1).expect("rotates");
        costs.push(stats::total_cost(&car));
    }

    // front, rear, side, 360°, front
    assert_eq!(costs, vec![15, 15, 15, 21, 15]);
    assert_eq!(
        car.weapons[1].facing,
        WeaponFacing::UserSelected(Direction::Front)
    );
}

#[test]
fn test_crew_fired_weapon_never_rotates() {
    let car = vehicle("c", "Crew").with_weapon(&weapon("gr")).expect("fits");
    let rotated = car.with_weapon_rotated(1).expect("rotates");
    assert_eq!(rotated.weapons[1].facing, WeaponFacing::CrewFired);
    assert_eq!(stats::total_cost(&rotated), stats::total_cost(&car));
}

// ==========================================================================
// Upgrade limits
// ==========================================================================

#[test]
fn test_extra_crewmember_capped_at_base_crew() {
    let crew = upgrade("c");
    let car = vehicle("c", "Crowded")
        .with_upgrade(&crew)
        .and_then(|v| v.with_upgrade(&crew))
        .expect("two extra crew fit");

    assert_eq!(stats::total_crew(&car), 4);
    assert_eq!(
        car.with_upgrade(&crew),
        Err(VehicleEditError::UpgradeNotAllowed)
    );

    let bike = vehicle("bk", "Solo");
    let bike = bike.with_upgrade(&crew).expect("one extra crew fits");
    assert_eq!(
        bike.with_upgrade(&crew),
        Err(VehicleEditError::UpgradeNotAllowed)
    );
}

#[test]
fn test_single_upgrades_enforced() {
    let buggy = vehicle("bg", "Caged");
    assert!(!stats::can_add_upgrade(&upgrade("rc"), &buggy));
    assert_eq!(
        buggy.with_upgrade(&upgrade("rc")),
        Err(VehicleEditError::UpgradeNotAllowed)
    );
}

#[test]
fn test_rams_one_per_facing() {
    let ram = upgrade("r");
    let mut car = vehicle("c", "Rammer");
    for _ in 0..3 {
        car = car.with_upgrade(&ram).expect("fits");
    }
    let directions: Vec<_> = car.upgrades.iter().filter_map(|u| u.direction).collect();
    assert_eq!(
        directions,
        vec![Direction::Front, Direction::Rear, Direction::Side]
    );
    assert_eq!(
        car.with_upgrade_rotated(0).expect("rotates"),
        car,
        "saturated rams stay put"
    );
}

// ==========================================================================
// Team editing
// ==========================================================================

#[test]
fn test_build_then_edit_team() {
    let team = apply(&Team::initial(), TeamIntent::RenameTeam("Wasteland".to_string()));
    let team = apply(&team, TeamIntent::AddVehicle(vehicle("c", "Car")));
    let team = apply(&team, TeamIntent::AddVehicle(vehicle("t", "Truck")));

    let armed = team.vehicles[1]
        .with_weapon(&weapon("ft"))
        .and_then(|v| v.with_upgrade(&upgrade("ap")))
        .expect("fits");
    let team = apply(
        &team,
        TeamIntent::UpdateVehicle {
            index: 1,
            vehicle: armed,
        },
    );
    let team = apply(&team, TeamIntent::RemoveVehicle { index: 0 });

    assert_eq!(team.name, "Wasteland");
    assert_eq!(team.vehicles.len(), 1);
    let stats = VehicleStats::of(&team.vehicles[0]);
    assert_eq!(stats.cost, 15 + 4 + 4);
    assert_eq!(stats.hull, 14);
    assert_eq!(stats.build_slots_used, 3);
    assert_eq!(stats.build_slots_remaining(), 0);
}

#[test]
fn test_random_vehicles_respect_budget() {
    let mut team = Team::initial();
    for cost in [10, 25, 40] {
        team = apply(&team, TeamIntent::AddRandomVehicle { cost });
    }
    assert_eq!(team.vehicles.len(), 3);
    for (vehicle, cost) in team.vehicles.iter().zip([10, 25, 40]) {
        assert!(stats::total_cost(vehicle) <= cost);
        assert!(stats::build_slots_in_use(vehicle) <= vehicle.vehicle_type.build_slots);
    }
}
