//! Roster codec benchmarks.
//!
//! Run with: `cargo bench -p gaslands_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gaslands_core::codec::{CondensedTeam, JsonFormat, RosterCodec, RosterFormat};
use gaslands_core::team::Team;
use gaslands_test_utils::fixtures::{armed_car, catalog, mine_buggy};

fn large_team() -> Team {
    Team {
        name: "Convoy".to_string(),
        vehicles: (0..12)
            .map(|i| if i % 2 == 0 { armed_car() } else { mine_buggy() })
            .collect(),
    }
}

/// Encode and decode a twelve-vehicle team in both formats.
pub fn codec_benchmark(c: &mut Criterion) {
    let codec = RosterCodec::new(catalog());
    let team = large_team();
    let compact = codec.encode(&team).expect("encodes");
    let legacy = JsonFormat
        .encode(&CondensedTeam::from(&team))
        .expect("encodes");

    c.bench_function("encode_compact", |b| {
        b.iter(|| codec.encode(black_box(&team)))
    });
    c.bench_function("decode_compact", |b| {
        b.iter(|| codec.decode(black_box(&compact)))
    });
    c.bench_function("decode_legacy_json", |b| {
        b.iter(|| codec.decode(black_box(&legacy)))
    });
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
