use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

use chat_gateway::api::middleware::{RateLimitConfig, RateLimiter};
use chat_gateway::application::sanitize::Sanitizer;

fn bench_sanitize_text(c: &mut Criterion) {
    let clean = "What is the capital of France?";
    let hostile = r#"<script>alert('xss')</script><img onerror="steal()"> & friends"#;

    c.bench_function("sanitize_text_clean", |b| {
        b.iter(|| Sanitizer::sanitize_text(black_box(clean)))
    });

    c.bench_function("sanitize_text_hostile", |b| {
        b.iter(|| Sanitizer::sanitize_text(black_box(hostile)))
    });
}

fn bench_sanitize_json(c: &mut Criterion) {
    let body = serde_json::json!({
        "chatId": 42,
        "content": "Tell me about <b>Rust</b> & its borrow checker",
        "role": "user",
        "responseType": "text"
    });

    c.bench_function("sanitize_json_request_body", |b| {
        b.iter(|| Sanitizer::sanitize_json(black_box(&body)))
    });
}

fn bench_rate_limiter(c: &mut Criterion) {
    let limiter = RateLimiter::new(RateLimitConfig {
        max_attempts: u32::MAX,
        window: Duration::from_secs(60),
    });

    c.bench_function("rate_limiter_check_single_key", |b| {
        b.iter(|| limiter.check(black_box("10.0.0.1")))
    });

    let mut counter = 0u64;
    c.bench_function("rate_limiter_check_many_keys", |b| {
        b.iter(|| {
            counter += 1;
            let key = format!("10.0.{}.{}", (counter >> 8) & 0xff, counter & 0xff);
            limiter.check(black_box(&key))
        })
    });
}

criterion_group!(
    benches,
    bench_sanitize_text,
    bench_sanitize_json,
    bench_rate_limiter
);
criterion_main!(benches);
