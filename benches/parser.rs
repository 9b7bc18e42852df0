use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use minic::frontend::{parser::Parser, tokenize};

fn parse(source: &str) {
    let tokens = tokenize(source);
    let program = Parser::new(&tokens).parse();
    assert!(program.is_ok());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "x = 1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    source.push(';');
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| parse(&source)));
}

fn many_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("many-statements");

    let mut source = "int a, b; int f(int x = 1; bool y) { read x; }\n".to_string();
    for _i in 0..200 {
        source.push_str("if a then { b := -a * (b - 2) / 3; write b; } else while b do read a; // tail\n");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many-statements", |b| b.iter(|| parse(&source)));
}

fn tokenize_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let mut source = String::new();
    for _i in 0..500 {
        source.push_str("x1 := 3.14 * y_2 /* note */ >= 10 && z != 0;\n");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tokenize", |b| b.iter(|| tokenize(&source)));
}

criterion_group!(benches, long_expr, many_statements, tokenize_only);
criterion_main!(benches);
