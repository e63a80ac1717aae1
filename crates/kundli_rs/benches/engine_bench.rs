use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_rs::{Chart, analyze, analyze_career, analyze_doshas, analyze_json, dignity_by_name};

const CHART: &str = r#"{
    "ascendant": "Aries",
    "planets": [
        { "name": "Sun", "house": 10 },
        { "name": "Moon", "house": 11 },
        { "name": "Mars", "house": 1 },
        { "name": "Mercury", "house": 10 },
        { "name": "Jupiter", "house": 4 },
        { "name": "Venus", "house": 11 },
        { "name": "Saturn", "house": 7, "nakshatra": "Swati" },
        { "name": "Rahu", "house": 12 },
        { "name": "Ketu", "house": 6 }
    ]
}"#;

fn parse_bench(c: &mut Criterion) {
    c.bench_function("chart_from_json", |b| {
        b.iter(|| Chart::from_json_str(black_box(CHART)))
    });
}

fn engine_bench(c: &mut Criterion) {
    let Ok(chart) = Chart::from_json_str(CHART) else {
        return;
    };

    let mut group = c.benchmark_group("engines");
    group.bench_function("career", |b| b.iter(|| analyze_career(black_box(&chart))));
    group.bench_function("doshas", |b| b.iter(|| analyze_doshas(black_box(&chart))));
    group.bench_function("full_report", |b| b.iter(|| analyze(black_box(&chart))));
    group.bench_function("full_report_from_json", |b| {
        b.iter(|| analyze_json(black_box(CHART)))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    c.bench_function("dignity_by_name", |b| {
        b.iter(|| dignity_by_name(black_box("Jupiter"), black_box("Cancer")))
    });
}

criterion_group!(benches, parse_bench, engine_bench, lookup_bench);
criterion_main!(benches);
