use criterion::{Criterion, black_box, criterion_group, criterion_main};
use f::operators::{SeparatorSet, Tokenizer};

fn make_lines(count: usize, sep: &str) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let last = format!("line{}", i);
            ["word1", "word2", "word3", "word4", "word5", last.as_str()]
                .join(sep)
                .into_bytes()
        })
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let lines = make_lines(10_000, "  \t");
    let tokenizer = Tokenizer::default();

    c.bench_function("split_whitespace_10k", |b| {
        let mut spans = Vec::new();
        b.iter(|| {
            let mut total = 0;
            for line in &lines {
                total += tokenizer.split(line, &mut spans).len();
            }
            black_box(total)
        })
    });
}

fn bench_split_chars(c: &mut Criterion) {
    let lines = make_lines(10_000, "→");
    let tokenizer = Tokenizer::new(SeparatorSet::new("→"));

    c.bench_function("split_chars_10k", |b| {
        let mut spans = Vec::new();
        b.iter(|| {
            let mut total = 0;
            for line in &lines {
                total += tokenizer.split(line, &mut spans).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_split, bench_split_chars);
criterion_main!(benches);
