//! Suggestion and menu loading benchmarks.
//!
//! Measures loading, filtering and the per-request suggestion pass on menus
//! of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Write;
use tempfile::NamedTempFile;

use brigade::{
    BuffetStatus, EventType, MenuDataset, MenuFilter, Season, StrategyReport, SuggestionEngine,
};

const CATEGORIES: [&str; 8] = [
    "Starter", "Pasta", "Pizza", "Fried", "Seafood", "Dessert", "Cake", "Pastry",
];

/// Generate a menu CSV with `rows` dishes.
fn generate_menu_csv(rows: usize) -> String {
    let mut data = String::from("ID,Item Name,Category,Type,Buffet Status,Origin/Details\n");
    for row in 0..rows {
        data.push_str(&format!(
            "{},Dish {},{},{},{},Region {}\n",
            row + 1,
            row + 1,
            CATEGORIES[row % CATEGORIES.len()],
            if row % 3 == 0 { "Veg" } else { "Non-Veg" },
            if row % 5 == 4 { "Absent" } else { "Present" },
            row % 20,
        ));
    }
    data
}

fn load_menu(rows: usize) -> MenuDataset {
    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
    temp.write_all(generate_menu_csv(rows).as_bytes()).unwrap();
    MenuDataset::load(temp.path()).unwrap()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_load");

    for rows in [30, 1_000, 10_000].iter() {
        let data = generate_menu_csv(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("csv_rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(MenuDataset::load(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

fn bench_future_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("future_suggestions");

    for rows in [30, 1_000, 10_000].iter() {
        let menu = load_menu(*rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &menu, |b, menu| {
            b.iter(|| {
                black_box(SuggestionEngine::generate_future_suggestions(
                    menu,
                    &EventType::Wedding,
                    150,
                    Season::Winter,
                ))
            })
        });
    }

    group.finish();
}

fn bench_filter_and_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_report");
    let menu = load_menu(10_000);
    let filter = MenuFilter::all()
        .with_categories(["Pasta", "Cake"])
        .with_buffet_statuses([BuffetStatus::Present]);

    group.bench_function("filter", |b| b.iter(|| black_box(menu.filter(&filter))));
    group.bench_function("strategy_report", |b| {
        b.iter(|| black_box(StrategyReport::build(&menu)))
    });
    group.bench_function("item_prep_guides", |b| {
        b.iter(|| black_box(SuggestionEngine::item_prep_guides(&menu)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_load,
    bench_future_suggestions,
    bench_filter_and_report
);
criterion_main!(benches);
