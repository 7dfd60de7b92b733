use bsharp::{Lexer, Parser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SOURCE: &str = r#"
    (fn area [w h]
      (* w h))
    (print "Value: %n" (- (+ 1 2) 5))
    (+ (* variable 2) othervariable (sin reallygoodvariable))
    [1 2 3 "four" five [6.0 7.5]]
"#;

fn lexer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize sample program", |b| {
        b.iter(|| Lexer::new(black_box(SOURCE)).scan_tokens())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    c.bench_function("parse sample program", |b| {
        b.iter(|| {
            let mut parser = Parser::new(Lexer::new(black_box(SOURCE)));
            parser.parse_program()
        })
    });

    let nested = format!("{}1{}", "(+ ".repeat(200), ")".repeat(200));
    c.bench_function("parse deeply nested call", |b| {
        b.iter(|| {
            let mut parser = Parser::new(Lexer::new(black_box(&nested)));
            parser.parse_program()
        })
    });
}

criterion_group!(benches, lexer_benchmark, parser_benchmark);
criterion_main!(benches);
