use cmdrouter::output::Responder;
use cmdrouter::router::{Matcher, tokenizer};
use cmdrouter::{Router, with_full_pattern};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::Value;
use std::hint::black_box;
use std::io;
use termcolor::NoColor;

struct Discard;

impl Responder for Discard {
    fn respond(&mut self, _outcome: anyhow::Result<Value>) -> io::Result<()> {
        Ok(())
    }
}

fn build_router(size: usize) -> Router<()> {
    let mut router = Router::new();
    for i in 0..size {
        router.register(
            format!("^cmd{}$", i),
            |_| Ok(Value::Null),
            [with_full_pattern(format!("^command {}$", i))],
        );
    }
    router
}

fn bench_tokenize(c: &mut Criterion) {
    let args: Vec<String> = ["", "deploy", "--env=prod", "service", "", "-v", "now"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    c.bench_function("tokenize", |b| {
        b.iter(|| tokenizer::tokenize(black_box(&args)))
    });
    c.bench_function("segments", |b| {
        b.iter(|| tokenizer::segments(black_box(&args)))
    });
}

fn bench_match(c: &mut Criterion) {
    let router = build_router(50);
    let matcher = Matcher::new(router.routes());

    c.bench_function("match_first", |b| {
        b.iter(|| matcher.find(black_box("cmd0")))
    });
    c.bench_function("match_last_full_pattern", |b| {
        b.iter(|| matcher.find(black_box("command 49")))
    });
    c.bench_function("match_miss", |b| {
        b.iter(|| matcher.find(black_box("bogus")))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let router = build_router(50);
    let args = vec!["cmd25".to_string()];

    c.bench_function("dispatch_hit", |b| {
        b.iter(|| {
            let mut out = NoColor::new(io::sink());
            router
                .dispatch(black_box(args.clone()), &(), &mut Discard, &mut out)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_match, bench_dispatch);
criterion_main!(benches);
