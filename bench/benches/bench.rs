#[macro_use]
extern crate criterion;
use criterion::{Criterion, SamplingMode};
use num_fermat::{classify64, is_carmichael, mod_exp, Classification};
#[cfg(feature = "num-primes")]
use num_primes::Verification;
use number_theory::NumberTheory;
use primal_check::miller_rabin;

pub fn bench_classify(c: &mut Criterion) {
    const N0: u64 = 100_000;
    const STEP: usize = 101;

    let numbers = || (1..N0).step_by(STEP);

    let mut group = c.benchmark_group("prime counting (u64)");

    group.bench_function("num-fermat (this crate)", |b| {
        b.iter(|| {
            numbers()
                .filter(|&n| classify64(n, 10) == Ok(Classification::Prime))
                .count()
        })
    });
    #[cfg(feature = "num-primes")]
    group.bench_function("num-primes", |b| {
        b.iter(|| {
            numbers()
                .filter(|&n| Verification::is_prime(&n.into()))
                .count()
        })
    });
    group.bench_function("primal-check", |b| {
        b.iter(|| numbers().filter(|&n| miller_rabin(n)).count())
    });
    group.bench_function("number-theory", |b| {
        b.iter(|| numbers().filter(|&n| NumberTheory::is_prime(&n)).count())
    });

    group.finish();
}

pub fn bench_carmichael(c: &mut Criterion) {
    let mut group = c.benchmark_group("carmichael detection");
    group.sample_size(10).sampling_mode(SamplingMode::Flat);

    // 561 and 62745 are Carmichael, 65537 is prime so the scan stops at
    // the square root
    for n in [561u64, 62745, 65537] {
        group.bench_function(format!("scan {}", n), |b| b.iter(|| is_carmichael(&n)));
    }

    group.finish();
}

pub fn bench_mod_exp(c: &mut Criterion) {
    use num_bigint::BigUint;

    let p = BigUint::from(2u8).pow(255) - 19u8;
    let base = BigUint::from(0xdeadbeefu32);
    let exp = &p - 1u8;

    let mut group = c.benchmark_group("modular exponentiation (255 bits)");
    group.bench_function("num-fermat (this crate)", |b| {
        b.iter(|| mod_exp(&base, &exp, &p))
    });
    group.bench_function("num-bigint modpow", |b| b.iter(|| base.modpow(&exp, &p)));
    group.finish();
}

criterion_group!(benches, bench_classify, bench_carmichael, bench_mod_exp);
criterion_main!(benches);
