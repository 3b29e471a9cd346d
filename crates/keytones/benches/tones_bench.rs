use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keytones::{KeyTones, MAX_KEY, key_to_frequency};

fn key_lookup_bench(c: &mut Criterion) {
    let tones = KeyTones::standard().expect("standard tables should fit");

    let mut group = c.benchmark_group("keytones_lookup");
    group.bench_function("frequency_exact_all_keys", |b| {
        b.iter(|| {
            (0..=MAX_KEY)
                .map(|k| key_to_frequency(black_box(k)).expect("valid key"))
                .sum::<f64>()
        })
    });
    group.bench_function("frequency_approx_all_keys", |b| {
        b.iter(|| {
            (0..=MAX_KEY)
                .map(|k| tones.frequency_approx(black_box(k)).expect("valid key"))
                .sum::<f64>()
        })
    });
    group.bench_function("period_approx_all_keys", |b| {
        b.iter(|| {
            (0..=MAX_KEY)
                .map(|k| tones.period_approx(black_box(k)).expect("valid key"))
                .sum::<f64>()
        })
    });
    group.finish();
}

fn table_fit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("keytones_fit");
    group.bench_function("standard_tables", |b| {
        b.iter(|| KeyTones::standard().expect("standard tables should fit"))
    });
    group.finish();
}

criterion_group!(benches, key_lookup_bench, table_fit_bench);
criterion_main!(benches);
