use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use idkit::sequence::generate;
use idkit::{Alphabet, Entropy};

pub fn bench_generate(c: &mut Criterion) {
    let entropy = Entropy::with_seed(0xDEAD_BEEF);

    c.bench_function("letters 20", |b| {
        b.iter(|| generate(&entropy, &Alphabet::LETTERS, black_box(20)));
    });

    c.bench_function("letters 100", |b| {
        b.iter(|| generate(&entropy, &Alphabet::LETTERS, black_box(100)));
    });

    c.bench_function("digits 20", |b| {
        b.iter(|| generate(&entropy, &Alphabet::DIGITS, black_box(20)));
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
