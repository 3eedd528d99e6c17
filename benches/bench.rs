// Criterion benchmarks for Insight Quiz

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use insight_quiz::core::{score_catalog, Quiz, QuizSession, Recommender};
use insight_quiz::models::Resource;

const TAGS: [&str; 8] = ["visual", "reading", "career", "home", "solar", "wind", "storage", "free"];

fn create_catalog(size: usize) -> Vec<Resource> {
    (0..size)
        .map(|i| {
            let tags = [TAGS[i % TAGS.len()], TAGS[(i / 3) % TAGS.len()], TAGS[(i / 7) % TAGS.len()]];
            Resource::new(&format!("Resource {}", i), "https://example.org", &tags, "Free")
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let catalog = create_catalog(100);
    let answers = ["visual", "career", "solar", "free"];

    c.bench_function("score_catalog_100", |b| {
        b.iter(|| score_catalog(black_box(&catalog), black_box(&answers)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::default();
    let answers = ["visual", "career", "solar", "free"];

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog = create_catalog(*catalog_size);

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&catalog), black_box(&answers)));
            },
        );
    }

    group.finish();
}

fn bench_full_quiz(c: &mut Criterion) {
    let quiz = Quiz::default();
    let tags = ["visual", "career", "solar", "paid"];

    c.bench_function("full_quiz_session", |b| {
        b.iter(|| {
            let mut session = QuizSession::new();
            session.start(&quiz).ok();
            for (index, tag) in tags.iter().enumerate() {
                session.select(&quiz, index, tag).ok();
            }
            black_box(session.results(&quiz))
        });
    });
}

criterion_group!(benches, bench_scoring, bench_recommend, bench_full_quiz);

criterion_main!(benches);
