//! # IP Watch Benchmarks
//!
//! | Path | Operation |
//! |------|-----------|
//! | iw-01 Ingestion | decode one 68-byte record |
//! | iw-02 Aggregation | record one observation |
//! | iw-02 Aggregation | classify and render an application |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iw_01_ingestion::{decode, encode};
use iw_02_aggregation::{AggregationService, EventAggregationApi};
use rand::Rng;
use shared_types::{Address, AppKey, IpEvent};

const SHA: &str = "0fe3fa2fa0869e5100e24ede99f6daf2fc8a30cfd3a10e9a8e17b8926fc445ce";

fn random_addresses(n: usize) -> Vec<Address> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| Address::new(rng.gen())).collect()
}

// ============================================================================
// IW-01: Record decoding
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("iw-01-ingestion");
    let payload = encode(&IpEvent {
        app_key: AppKey::new_unchecked(SHA),
        address: Address::from_octets([192, 160, 0, 1]),
    });

    group.throughput(Throughput::Elements(1));
    group.bench_function("decode_record", |b| {
        b.iter(|| black_box(decode(black_box(&payload)).is_ok()))
    });
    group.finish();
}

// ============================================================================
// IW-02: Store record / render
// ============================================================================

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("iw-02-aggregation");
    let app_key = AppKey::new_unchecked(SHA);
    let addresses = random_addresses(1024);

    group.throughput(Throughput::Elements(addresses.len() as u64));
    group.bench_function("record_1024", |b| {
        let store = AggregationService::new();
        b.iter(|| {
            for &address in &addresses {
                store.record(&app_key, address);
            }
        })
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("iw-02-aggregation");
    group.measurement_time(Duration::from_secs(10));
    let app_key = AppKey::new_unchecked(SHA);

    for distinct in [10usize, 1_000, 10_000] {
        let store = AggregationService::new();
        for address in random_addresses(distinct) {
            store.record(&app_key, address);
        }

        group.throughput(Throughput::Elements(distinct as u64));
        group.bench_with_input(BenchmarkId::new("render", distinct), &distinct, |b, _| {
            b.iter(|| black_box(store.render(&app_key).map(|json| json.len())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_record, bench_render);
criterion_main!(benches);
