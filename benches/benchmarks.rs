use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use deltaxor::Series;

const BASE_TS: u64 = 1_440_583_200;

fn sawtooth(i: u64) -> f64 {
    700.0 + (i % 40) as f64
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for count in [100u64, 1000, 10000] {
        group.throughput(Throughput::Elements(count));
        group.bench_function(format!("{count}_samples"), |b| {
            b.iter(|| {
                let mut series = Series::new();
                for i in 0..count {
                    series.append(BASE_TS + i * 60, black_box(sawtooth(i)));
                }
                black_box(series.num_bits())
            })
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    // Pre-encode data and replay it from a snapshot each iteration.
    let mut encoded = Series::new();
    for i in 0..10000u64 {
        encoded.append(BASE_TS + i * 60, sawtooth(i));
    }
    let num_bits = encoded.num_bits();
    let bytes = encoded.into_bytes();

    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Elements(10000));
    group.bench_function("10000_samples", |b| {
        b.iter(|| {
            let mut series = Series::from_parts(bytes.clone(), num_bits);
            for _ in 0..10000 {
                black_box(series.read().unwrap());
            }
        })
    });
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_samples", |b| {
        b.iter(|| {
            let mut series = Series::new();
            for i in 0..1000u64 {
                series.append(BASE_TS + i * 60, black_box(700.0));
            }
            for _ in 0..1000 {
                black_box(series.read().unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_append, bench_read, bench_roundtrip);
criterion_main!(benches);
