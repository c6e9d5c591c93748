use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

fn make_movies(count: usize) -> Vec<u8> {
    let movies: Vec<Value> = (0..count)
        .map(|i| {
            let shows: Vec<Value> = (0..(i % 6))
                .map(|s| {
                    json!({
                        "showID": format!("{:064x}", (i * 31 + s) as u128 * 0x9e37_79b9_7f4a_7c15),
                        "hall": s + 1,
                        "price": 4.5 + s as f64 * 0.75,
                        "subtitled": s % 2 == 0,
                    })
                })
                .collect();
            json!({
                "title": format!("Movie \"{i}\"\nPart {}", i % 3),
                "country": if i % 4 == 0 { "Francija" } else { "Slovenija" },
                "duration": 80 + (i % 90),
                "rating": if i % 5 == 0 { Value::Null } else { json!(i as f64 / 13.0) },
                "shows": shows,
            })
        })
        .collect();
    serde_json::to_vec(&movies).unwrap()
}

fn make_nested(depth: usize) -> Vec<u8> {
    let mut text = String::new();
    for i in 0..depth {
        text.push_str(&format!(r#"{{"level":{i},"items":[1,2,3],"child":"#));
    }
    text.push_str("null");
    text.push_str(&"}".repeat(depth));
    text.into_bytes()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.measurement_time(Duration::from_secs(5));

    for count in [10usize, 1_000, 20_000] {
        let input = make_movies(count);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("jsjson", count), &input, |b, input| {
            b.iter(|| jsjson::parse(black_box(input)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("serde_json", count), &input, |b, input| {
            b.iter(|| serde_json::from_slice::<Value>(black_box(input)).unwrap())
        });
    }

    let nested = make_nested(200);
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("jsjson/nested_200", |b| {
        b.iter(|| jsjson::parse(black_box(&nested)).unwrap())
    });

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let input = make_movies(1_000);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("movies_1000", |b| {
        b.iter(|| jsjson::tokenize(black_box(&input)).unwrap().len())
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_tokenize);
criterion_main!(benches);
