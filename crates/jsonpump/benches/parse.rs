use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use jsonpump::{Null, Parser};

/// A mixed document heavy on the expensive paths: strings with escapes,
/// numbers of every flavor, and moderate nesting.
fn build_document(records: usize) -> String {
    let mut doc = String::from("[");
    for i in 0..records {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            concat!(
                r#"{{"id":{},"name":"record-{}","score":{}.5,"tags":["a\n","b\t","é"],"#,
                r#""active":{},"delta":-{},"nested":{{"depth":[1,2,3]}}}}"#
            ),
            i,
            i,
            i % 100,
            i % 2 == 0,
            i
        ));
    }
    doc.push(']');
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = build_document(1_000);

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(doc.len() as u64));

    group.bench_function("jsonpump_whole", |b| {
        b.iter(|| {
            let mut parser = Parser::new(Null);
            parser.input(black_box(doc.as_bytes()));
            parser.eof().unwrap();
        });
    });

    group.bench_function("jsonpump_64b_chunks", |b| {
        b.iter(|| {
            let mut parser = Parser::new(Null);
            for chunk in black_box(doc.as_bytes()).chunks(64) {
                parser.input(chunk);
            }
            parser.eof().unwrap();
        });
    });

    group.bench_function("serde_json", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&doc)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
