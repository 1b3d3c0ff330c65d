use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_lib::{
    modular::{ModularNumber, U256SharePrime},
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
};
use std::time::Duration;

fn build_sequence(degree: u32) -> PointSequence<U256SharePrime> {
    let coefficients = (0..=degree).map(|_| ModularNumber::gen_random().expect("random generation failed")).collect();
    let polynomial = Polynomial::new(coefficients);
    let mut sequence = PointSequence::default();
    for x in 1..=degree + 1 {
        let x = ModularNumber::from_u32(x);
        let y = polynomial.eval(&x);
        sequence.push(Point::new(x, y));
    }
    sequence
}

fn run_lagrange_bench(c: &mut Criterion) {
    let sequence = build_sequence(32);
    c.bench_function("32-degree polynomial interpolation u256", |b| {
        b.iter(|| black_box(&sequence).lagrange_interpolate().expect("interpolation failed"))
    });
}

criterion_group!(
    name = random_lagrange_bench;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_lagrange_bench
);

criterion_main!(random_lagrange_bench);
