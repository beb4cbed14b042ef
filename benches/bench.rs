// Criterion benchmarks for Job Radar

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use job_radar::core::{extract_key_terms, extract_phrases, score_posting, Matcher};
use job_radar::models::{JobPosting, PreferenceSpec, ScoringPolicy};

const TITLES: &[&str] = &[
    "Staff Software Engineer, Distributed Systems",
    "Senior Backend Engineer",
    "Frontend Developer",
    "Marketing Manager",
    "Principal Infrastructure Architect",
    "Machine Learning Engineer, Inference",
    "Engineering Manager, Observability",
    "Junior Web Developer",
];

fn create_posting(id: usize) -> JobPosting {
    JobPosting {
        id: format!("bench-{}", id),
        company: "Bench Co".to_string(),
        title: TITLES[id % TITLES.len()].to_string(),
        team: if id % 2 == 0 { "Platform" } else { "Product" }.to_string(),
        location: if id % 3 == 0 { "Remote" } else { "New York" }.to_string(),
        snippet: String::new(),
        url: format!("https://jobs.bench.example/{}", id),
        posted: Utc::now(),
    }
}

fn create_preferences() -> PreferenceSpec {
    PreferenceSpec {
        looking_for: "- distributed systems\n- backend infrastructure\n- platform engineering\n- staff engineer"
            .to_string(),
        not_looking_for: "- frontend engineer\n- recruiter\n- marketing".to_string(),
    }
}

fn bench_extract_key_terms(c: &mut Criterion) {
    let preferences = create_preferences();
    c.bench_function("extract_key_terms", |b| {
        b.iter(|| extract_key_terms(black_box(&preferences.looking_for)));
    });
}

fn bench_extract_phrases(c: &mut Criterion) {
    let preferences = create_preferences();
    c.bench_function("extract_phrases", |b| {
        b.iter(|| extract_phrases(black_box(&preferences.looking_for)));
    });
}

fn bench_score_posting(c: &mut Criterion) {
    let policy = ScoringPolicy::default();
    let preferences = create_preferences();
    let posting = create_posting(0);

    c.bench_function("score_posting", |b| {
        b.iter(|| score_posting(black_box(&posting), black_box(&preferences), &policy));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_policy();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("matching");

    for posting_count in [10usize, 50, 100, 500, 1000].iter() {
        let postings: Vec<JobPosting> = (0..*posting_count).map(create_posting).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(posting_count),
            &postings,
            |b, postings| {
                b.iter(|| matcher.match_postings(black_box(&preferences), postings.clone()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_key_terms,
    bench_extract_phrases,
    bench_score_posting,
    bench_matching
);
criterion_main!(benches);
