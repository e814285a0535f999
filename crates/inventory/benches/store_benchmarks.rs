use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stockroom_inventory::{InventoryStore, SeedProduct};

fn seed(size: usize) -> Vec<SeedProduct> {
    (0..size)
        .map(|i| SeedProduct::new(format!("Souvenir {i}"), 1_000_000))
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_by_name");
    for size in [10usize, 1_000, 10_000] {
        let store = InventoryStore::new(seed(size)).unwrap();
        let last = format!("SOUVENIR {}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, name| {
            b.iter(|| black_box(store.product(name)))
        });
    }
    group.finish();
}

fn bench_record_sale(c: &mut Criterion) {
    let store = InventoryStore::new(seed(1_000)).unwrap();
    c.bench_function("record_sale", |b| {
        b.iter(|| black_box(store.record_sale("souvenir 500", 1)))
    });
}

fn bench_low_stock(c: &mut Criterion) {
    let store = InventoryStore::new(
        (0..1_000)
            .map(|i| SeedProduct::new(format!("Souvenir {i}"), (i % 20) as i64))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    c.bench_function("low_stock_items_1000", |b| {
        b.iter(|| black_box(store.low_stock_items(5)))
    });
}

criterion_group!(benches, bench_lookup, bench_record_sale, bench_low_stock);
criterion_main!(benches);
