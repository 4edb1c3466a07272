use creole_engine::Parser;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
mod common;

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let mut parser = Parser::new();
    parser.set_option("base_url", "/wiki/").ok();
    parser
        .register_macro("note", |_, body| format!("<div class=\"note\">{body}</div>"))
        .ok();

    for size in [1, 10, 100] {
        let content = common::generate_creole_content(size);
        group.bench_with_input(BenchmarkId::new("mixed_document", size), &content, |b, content| {
            b.iter(|| std::hint::black_box(parser.parse(std::hint::black_box(content))));
        });
    }

    let lists = common::generate_nested_lists(50, 6);
    group.bench_function("nested_lists", |b| {
        b.iter(|| std::hint::black_box(parser.parse(std::hint::black_box(&lists))));
    });

    group.finish();
}

criterion_group!(benches, bench_documents);
criterion_main!(benches);
