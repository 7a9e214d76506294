//! Benchmarks for reply normalization
//!
//! Covers the three reply shapes and the quoted-run scan on long prose.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lenschat::models::RawReply;
use lenschat::normalizer::normalize;

/// Prose with `items` quoted suggestions scattered through it.
fn quoted_prose(items: usize) -> String {
    (0..items)
        .map(|i| format!("추천 {}번은 \"렌즈 옵션 {}\" 입니다, 그리고 ", i + 1, i + 1))
        .collect()
}

fn json_array(items: usize) -> String {
    let entries: Vec<String> = (0..items)
        .map(|i| format!("\"  [문장 {}]  \"", i + 1))
        .collect();
    format!("[{}]", entries.join(", "))
}

fn bench_reply_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_shapes");

    let list = RawReply::List(vec![
        "1~2일 내 배송됩니다".to_string(),
        "  [배송비는 3만원 이상 무료입니다]  ".to_string(),
        "''".to_string(),
    ]);
    group.bench_function("list", |b| b.iter(|| normalize(black_box(&list))));

    let json = RawReply::Text(r#"["1~2일 내 배송됩니다", "배송비는 3만원 이상 무료입니다"]"#.to_string());
    group.bench_function("json_string", |b| b.iter(|| normalize(black_box(&json))));

    let plain = RawReply::Text("렌즈는 하루 8시간 이하로 착용하세요.".to_string());
    group.bench_function("plain_text", |b| b.iter(|| normalize(black_box(&plain))));

    group.finish();
}

fn bench_reply_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_sizes");

    for size in [1, 10, 50, 200].iter() {
        let prose = RawReply::Text(quoted_prose(*size));
        let json = RawReply::Text(json_array(*size));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("quoted_prose", size), &prose, |b, raw| {
            b.iter(|| normalize(black_box(raw)))
        });
        group.bench_with_input(BenchmarkId::new("json_array", size), &json, |b, raw| {
            b.iter(|| normalize(black_box(raw)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reply_shapes, bench_reply_sizes);
criterion_main!(benches);
