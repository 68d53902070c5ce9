use std::fs;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tempfile::TempDir;

use agenda::{
    config::RegistryConfig,
    registry::Registry,
    types::parse_timestamp,
};

fn seed_events(dir: &TempDir, n: usize) -> RegistryConfig {
    let cfg = RegistryConfig::in_dir(dir.path());
    let mut text = String::with_capacity(n * 64);
    for i in 0..n {
        let day = i % 28 + 1;
        let month = i % 12 + 1;
        let year = 2000 + i % 50;
        text.push_str(&format!(
            "E{i};Rua {i};Shows;{day:02}/{month:02}/{year} 20:00;bench event\n"
        ));
    }
    fs::write(cfg.events_path(), text).expect("seed events");
    cfg
}

fn bench_load(c: &mut Criterion) {
    let dir = TempDir::new().expect("tmp");
    let cfg = seed_events(&dir, 50_000);
    c.bench_function("registry_open_50k_events", |b| {
        b.iter(|| Registry::open(&cfg).expect("open"));
    });
}

fn bench_time_queries(c: &mut Criterion) {
    let dir = TempDir::new().expect("tmp");
    let cfg = seed_events(&dir, 50_000);
    let registry = Registry::open(&cfg).expect("open");
    let now = parse_timestamp("01/06/2025 12:00").expect("now");

    c.bench_function("upcoming_events_50k", |b| {
        b.iter(|| registry.upcoming_events(now).len());
    });
    c.bench_function("past_events_50k", |b| {
        b.iter(|| registry.past_events(now).len());
    });
}

fn bench_participation_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("participations_by_event");
    for n in [1_000usize, 10_000usize] {
        let dir = TempDir::new().expect("tmp");
        let mut registry = Registry::open(&RegistryConfig::in_dir(dir.path())).expect("open");
        for i in 0..n {
            registry
                .participate(format!("E{}", i % 100), format!("U{}", i % 997))
                .expect("participate");
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| registry.participations_by_event().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_time_queries, bench_participation_index);
criterion_main!(benches);
