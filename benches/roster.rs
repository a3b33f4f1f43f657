use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nba_roster::{
    config::options::HeightMode,
    scrape,
};

const PAGE: &str = include_str!("../tests/fixtures/roster_bos.html");

fn bench_roster(c: &mut Criterion) {
    c.bench_function("roster_extract", |b| {
        b.iter(|| {
            let rows = scrape::extract(black_box(PAGE)).unwrap();
            black_box(rows.len())
        })
    });

    let rows = scrape::extract(PAGE).unwrap();
    c.bench_function("roster_normalize", |b| {
        b.iter(|| {
            let table = scrape::normalize(black_box(&rows), HeightMode::Legacy).unwrap();
            black_box(table.len())
        })
    });
}

criterion_group!(benches, bench_roster);
criterion_main!(benches);
