use cos_compactor::{compress, compress_with_stats};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const LINES: &[&str] = &[
    "# Project Kernel",
    "## Naming Laws",
    "- Every file must use kebab-case.",
    "- A violation of this requirement is an error.",
    "* Keep modules under two hundred lines.",
    "This is a mandatory rule for all of the contributors.",
    "Please ensure that the tests are run with every change.",
    "<!-- maintained by the scaffold -->",
    "The goal of this section is to explain the layout.",
    "",
];

fn generate_markdown(size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        if let Some(line) = LINES.choose(&mut rng) {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}

fn bench_compress(c: &mut Criterion) {
    let md_1k = generate_markdown(1);
    let md_10k = generate_markdown(10);
    let md_100k = generate_markdown(100);

    c.bench_function("compress_1kb", |b| b.iter(|| black_box(compress(black_box(&md_1k)))));
    c.bench_function("compress_10kb", |b| b.iter(|| black_box(compress(black_box(&md_10k)))));
    c.bench_function("compress_100kb", |b| b.iter(|| black_box(compress(black_box(&md_100k)))));
}

fn bench_compress_stats(c: &mut Criterion) {
    let md_10k = generate_markdown(10);
    c.bench_function("compress_with_stats_10kb", |b| {
        b.iter(|| black_box(compress_with_stats(black_box(&md_10k))))
    });
}

criterion_group!(benches, bench_compress, bench_compress_stats);
criterion_main!(benches);
