use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use f::input::LineReader;
use f::interpreter::{Config, Context};
use f::operators::{Joined, JsonArray};
use f::parser::parse_rules;

fn make_input(rows: usize, cols: usize) -> Vec<u8> {
    let mut input = Vec::new();
    for i in 0..rows {
        let row: Vec<String> = (0..cols).map(|j| format!("r{}c{}", i, j)).collect();
        input.extend_from_slice(row.join(" ").as_bytes());
        input.push(b'\n');
    }
    input
}

fn bench_join(c: &mut Criterion) {
    let input = make_input(10_000, 10);

    c.bench_function("join_lines_10k", |b| {
        b.iter(|| {
            let config = Config {
                format: Box::new(Joined::new(",")),
                flush: false,
                ..Config::default()
            };
            let mut ctx = Context::new(config, parse_rules(&["-1:1"]).unwrap());
            let mut reader = LineReader::new(Cursor::new(&input[..]), "bench");
            let mut out = Vec::with_capacity(input.len());
            black_box(ctx.process(&mut reader, &mut out).unwrap())
        })
    });

    c.bench_function("json_lines_10k", |b| {
        b.iter(|| {
            let config = Config {
                format: Box::new(JsonArray),
                flush: false,
                ..Config::default()
            };
            let mut ctx = Context::new(config, parse_rules(&["2:5"]).unwrap());
            let mut reader = LineReader::new(Cursor::new(&input[..]), "bench");
            let mut out = Vec::with_capacity(input.len());
            black_box(ctx.process(&mut reader, &mut out).unwrap())
        })
    });
}

criterion_group!(benches, bench_join);
criterion_main!(benches);
