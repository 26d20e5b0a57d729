use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use study_match::core::{draw_names, pick_common_subjects};
use study_match::models::MatchRequest;
use study_match::Matcher;

fn create_request(strong: usize, help: usize) -> MatchRequest {
    MatchRequest {
        year: "2".to_string(),
        branch: "CSE".to_string(),
        strong_subjects: (0..strong).map(|i| format!("Strong {}", i)).collect(),
        help_subjects: (0..help).map(|i| format!("Help {}", i)).collect(),
        study_style: "Quiet".to_string(),
        ..Default::default()
    }
}

fn bench_generate_matches(c: &mut Criterion) {
    let matcher = Matcher::default();
    let request = create_request(6, 4);
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_matches", |b| {
        b.iter(|| matcher.generate_matches(black_box(&request), &mut rng))
    });
}

fn bench_generate_matches_no_subjects(c: &mut Criterion) {
    let matcher = Matcher::default();
    let request = create_request(0, 0);
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_matches_no_subjects", |b| {
        b.iter(|| matcher.generate_matches(black_box(&request), &mut rng))
    });
}

fn bench_draw_names(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("draw_names", |b| {
        b.iter(|| draw_names(&mut rng, black_box(5)))
    });
}

fn bench_pick_common_subjects(c: &mut Criterion) {
    let request = create_request(10, 10);
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("pick_common_subjects", |b| {
        b.iter(|| {
            pick_common_subjects(
                &mut rng,
                black_box(&request.strong_subjects),
                black_box(&request.help_subjects),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_generate_matches,
    bench_generate_matches_no_subjects,
    bench_draw_names,
    bench_pick_common_subjects
);
criterion_main!(benches);
