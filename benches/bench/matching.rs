// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use minire::{Pattern, is_match};

use super::ND;

criterion_group!(benches, bench, bench_pathological);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}{}", super::GROUP, ND, "matching"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let long = format!("{}HELLO123", "x".repeat(256));

    let variants = [
        ("short", "^colou?r$", "colour", true),
        ("short", "a[xyz]+z", "axyzxyzxz", true),
        ("short", "^[A-Z]+[0-9]*$", "Hello123", false),
        ("long", "[A-Z]+[0-9]*$", long.as_str(), true),
        ("long", "^[^0-9]*$", long.as_str(), false),
        ("long", "q.*z", long.as_str(), false),
    ];

    for (name, pattern, input, expected) in variants {
        let param = format!(
            "{}{ND}{}{ND}{}{ND}{}",
            name,
            pattern,
            if expected { "pos" } else { "neg" },
            input.len()
        );
        let pattern = Pattern::new(pattern);
        let routine = || black_box(&pattern).matches(black_box(input));

        assert_eq!(routine(), Ok(expected));

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new("matches", param), |b| b.iter(routine));
    }
}

fn bench_pathological(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}{}", super::GROUP, ND, "pathological"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));
    c.sample_size(10);

    // adjacent stars with no possible match backtrack over every split
    for n in [4, 6, 8] {
        let pattern = format!("{}b", "a*".repeat(n));
        let input = "a".repeat(16);

        assert_eq!(is_match(&pattern, &input), Ok(false));

        c.bench_function(BenchmarkId::new("nested-star", n), |b| {
            b.iter(|| is_match(black_box(&pattern), black_box(&input)))
        });
    }
}
