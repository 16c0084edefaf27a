use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wortquiz_core::parser::parse_csv;
use wortquiz_core::repository::{ImportStrategy, WordStore};

fn generate_csv(rows: usize) -> String {
    let mut s = String::from(
        "originalWord,translation,description,wordType,article,preposition,kasus,reflexive\n",
    );
    for i in 0..rows {
        match i % 3 {
            0 => s.push_str(&format!("Wort{i},word {i},,Nomen,Definit,,,\n")),
            1 => s.push_str(&format!("gehen{i},to go {i},,Verb,,nach,Dativ,false\n")),
            _ => s.push_str(&format!("schnell{i},fast {i},,Adjektiv,,,,\n")),
        }
    }
    s
}

fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");

    let small = generate_csv(10);
    let medium = generate_csv(100);
    let large = generate_csv(1000);

    group.bench_function("10_rows", |b| b.iter(|| parse_csv(black_box(&small))));
    group.bench_function("100_rows", |b| b.iter(|| parse_csv(black_box(&medium))));
    group.bench_function("1000_rows", |b| b.iter(|| parse_csv(black_box(&large))));

    group.finish();
}

fn bench_import_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("import_merge");

    let medium = generate_csv(100);
    let drafts = parse_csv(&medium).drafts;

    group.bench_function("100_into_empty", |b| {
        b.iter(|| {
            let mut store = WordStore::new();
            store.import_drafts(black_box(drafts.clone()), "", ImportStrategy::Merge)
        })
    });

    group.bench_function("100_over_existing", |b| {
        b.iter(|| {
            let mut store = WordStore::new();
            store.import_drafts(drafts.clone(), "", ImportStrategy::Merge);
            store.import_drafts(black_box(drafts.clone()), "", ImportStrategy::AddOnly)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse_csv, bench_import_merge);
criterion_main!(benches);
