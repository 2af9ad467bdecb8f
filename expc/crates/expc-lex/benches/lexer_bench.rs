//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package expc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use expc_lex::{classify, tokenize};

fn lexer_token_count(source: &str) -> usize {
    let (tokens, _) = tokenize(source);
    tokens.len()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "var x = 42; fn main() { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        import io;

        // Recursive fibonacci
        fn fibonacci(n: int) {
            if n < 2 {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        struct Point {
            x: float,
            y: float,
        }

        /* Prints every point
           in the list */
        fn draw(points: object) {
            for p : points {
                io.print("Point at ", p.x, ", ", p.y, '\n');
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let large = source.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("program_x100", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("var s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source = "var s = \"This is a longer string that contains some text for benchmarking purposes.\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(r#"var s = "a\"b\\c\"d";"#)))
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, text) in [
        ("integer", "123456"),
        ("hex", "0xDEADBEEF"),
        ("float", "3.14159"),
        ("keyword", "return"),
        ("identifier", "very_long_variable_name"),
    ] {
        group.bench_function(name, |b| b.iter(|| classify(black_box(text))));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_program,
    bench_lexer_strings,
    bench_classify
);
criterion_main!(benches);
