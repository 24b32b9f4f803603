use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maybe::{Nullable, StorageValue};

fn scan_int(c: &mut Criterion) {
    let mut n = Nullable::<i32>::null();
    c.bench_function("nullable: scan int", |b| {
        b.iter(|| {
            let _ = n.scan(black_box(StorageValue::Int(42)));
        });
    });
}

fn scan_null(c: &mut Criterion) {
    let mut n = Nullable::<i32>::of(7);
    c.bench_function("nullable: scan null", |b| {
        b.iter(|| {
            let _ = n.scan(black_box(StorageValue::Null));
        });
    });
}

criterion_group!(benches, scan_int, scan_null);
criterion_main!(benches);
