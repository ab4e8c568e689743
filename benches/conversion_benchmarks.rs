use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use roman_numeral::convert;

fn conversion_benchmarks(c: &mut Criterion) {
    let valid = ["I", "XIV", "LXXXIX", "CIII", "MMXXI", "MMMCMXCIX"];
    let invalid = ["IIII", "SXIII", "CMM", "CMLXXIIVVM"];

    c.bench_function("convert_valid", |b| {
        b.iter(|| {
            for numeral in valid {
                black_box(convert(black_box(numeral)).unwrap());
            }
        })
    });

    c.bench_function("convert_invalid", |b| {
        b.iter(|| {
            for numeral in invalid {
                black_box(convert(black_box(numeral)).is_err());
            }
        })
    });
}

criterion_group!(benches, conversion_benchmarks);
criterion_main!(benches);
