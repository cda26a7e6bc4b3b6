// Criterion benchmarks for Radar Match

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use radar_match::core::{distance::haversine_distance, is_within_radius, Matcher};
use radar_match::models::{
    AgeRange, Gender, GenderPreference, Location, MatchCandidate, Preferences, Profile,
};

const HOBBIES: [&str; 6] = ["hiking", "chess", "jazz", "yoga", "film", "cooking"];

fn create_profile(id: usize, gender: Gender, location: Location) -> Profile {
    Profile {
        uid: id.to_string(),
        name: format!("User {}", id),
        gender,
        age: 25 + (id % 10) as u8,
        hobbies: HOBBIES.iter().skip(id % 4).take(3).map(|s| s.to_string()).collect(),
        personality: Some((id * 7 % 101) as u8),
        location: Some(location),
        profile_image: None,
    }
}

fn create_preferences() -> Preferences {
    Preferences {
        gender_preference: GenderPreference::All,
        age_range: AgeRange::new(21, 40),
        distance_radius: 100.0,
        ..Preferences::default()
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.7131),
                black_box(-74.0063),
            )
        });
    });
}

fn bench_within_radius(c: &mut Criterion) {
    let origin = Location::new(40.7128, -74.0060);
    c.bench_function("is_within_radius", |b| {
        b.iter(|| {
            is_within_radius(
                black_box(Some(&origin)),
                black_box(40.7131),
                black_box(-74.0063),
                black_box(50.0),
            )
        });
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let origin = Location::new(40.7128, -74.0060);
    let me = create_profile(0, Gender::Female, origin);
    let other = create_profile(1, Gender::Male, origin);
    let preferences = create_preferences();

    c.bench_function("evaluate_pair", |b| {
        b.iter(|| {
            matcher.evaluate(
                black_box(&me),
                black_box(&preferences),
                black_box(&other),
                black_box(&preferences),
            )
        });
    });
}

fn bench_screening(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let origin = Location::new(40.7128, -74.0060);
    let me = create_profile(0, Gender::Female, origin);
    let preferences = create_preferences();

    let mut group = c.benchmark_group("screening");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<MatchCandidate> = (1..=*candidate_count)
            .map(|i| {
                let offset = (i as f64 * 0.00001) % 0.002;
                let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
                MatchCandidate {
                    profile: create_profile(i, gender, Location::new(40.7128 + offset, -74.0060)),
                    preferences: create_preferences(),
                    distance: 0.0,
                    seen_at: Utc::now(),
                }
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("screen", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    candidates
                        .iter()
                        .cloned()
                        .filter_map(|candidate| matcher.screen(&me, &preferences, candidate))
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_within_radius,
    bench_evaluate,
    bench_screening
);

criterion_main!(benches);
