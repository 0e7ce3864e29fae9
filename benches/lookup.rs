use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use mdao_cases::{AliasTable, Direction, PromotedToAbsoluteMap, RecordValues};

const VARS: usize = 1_000;

fn build() -> PromotedToAbsoluteMap {
    let mut table = AliasTable::new();
    let mut values = RecordValues::new();
    for i in 0..VARS {
        let absolute = format!("model.sub{}.comp{i}.y", i % 17);
        table.insert(Direction::Output, format!("y{i}"), [absolute.clone()]);
        values.insert(absolute, vec![i as f64; 4]);
    }
    PromotedToAbsoluteMap::outputs(Some(values), Arc::new(table))
}

fn bench_lookup(c: &mut Criterion) {
    let map = build();
    let names: Vec<String> = (0..VARS).map(|i| format!("y{i}")).collect();

    c.bench_function("promoted_lookup_hit", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let name = &names[i % VARS];
            i = i.wrapping_add(1);
            black_box(map.get(black_box(name)).is_ok())
        });
    });

    c.bench_function("promoted_lookup_miss", |b| {
        b.iter(|| black_box(map.get(black_box("not_a_var")).is_err()));
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
