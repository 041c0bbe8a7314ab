//! Session tests: opening links, debounced write-back, format migration.

use std::time::{Duration, Instant};

use gaslands_core::codec::{CondensedTeam, JsonFormat, RosterCodec, RosterFormat};
use gaslands_core::config::BuilderConfig;
use gaslands_core::persistence::{MemoryTokenStore, RosterSession};
use gaslands_core::team::TeamIntent;
use gaslands_test_utils::fixtures::{catalog, sample_team};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_legacy_link_is_rewritten_as_compact() {
    let legacy = JsonFormat
        .encode(&CondensedTeam::from(&sample_team()))
        .expect("encodes");
    let mut session = RosterSession::open(
        MemoryTokenStore::with_token(format!("?{legacy}")),
        RosterCodec::new(catalog()),
        BuilderConfig::default(),
    );
    assert_eq!(session.team(), &sample_team());

    let mut rng = StdRng::seed_from_u64(1);
    session.apply(
        TeamIntent::RenameTeam("Migrated".to_string()),
        &mut rng,
        Instant::now(),
    );
    assert!(session.flush());

    let store = session.into_store();
    let token = store.token().expect("written");
    assert!(!token.contains('%'));

    let reopened = RosterCodec::new(catalog()).decode(token);
    assert_eq!(reopened.name, "Migrated");
    assert_eq!(reopened.vehicles, sample_team().vehicles);
}

#[test]
fn test_configured_debounce_and_team_name() {
    let config = BuilderConfig::from_ron_str(
        "BuilderConfig(default_team_name: \"Scrapyard\", debounce_ms: 100)",
        "<inline>",
    )
    .expect("parses");
    let mut session = RosterSession::open(
        MemoryTokenStore::new(),
        RosterCodec::new(catalog()),
        config,
    );
    assert_eq!(session.team().name, "Scrapyard");

    let mut rng = StdRng::seed_from_u64(2);
    let start = Instant::now();
    session.apply(TeamIntent::AddRandomVehicle { cost: 20 }, &mut rng, start);

    assert!(!session.poll(start + Duration::from_millis(99)));
    assert!(session.poll(start + Duration::from_millis(100)));
    assert_eq!(session.store().write_count(), 1);
}

#[test]
fn test_garbage_link_opens_initial_team() {
    let session = RosterSession::open(
        MemoryTokenStore::with_token("?this is not a roster"),
        RosterCodec::new(catalog()),
        BuilderConfig::default(),
    );
    assert_eq!(session.team().name, "New Team");
    assert!(session.team().vehicles.is_empty());
    assert_eq!(session.store().write_count(), 0);
}

#[test]
fn test_garbage_link_keeps_configured_team_name() {
    let config = BuilderConfig::from_ron_str(
        "BuilderConfig(default_team_name: \"Scrapyard\")",
        "<inline>",
    )
    .expect("parses");
    let session = RosterSession::open(
        MemoryTokenStore::with_token("?AQID"),
        RosterCodec::new(catalog()),
        config,
    );
    assert_eq!(session.team().name, "Scrapyard");
    assert!(session.team().vehicles.is_empty());
}
