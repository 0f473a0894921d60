use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use radix64::{StreamingEncoder, crc24, decode_to_vec, encode_to_string};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode_to_string(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in SIZES.iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let encoded = encode_to_string(&data);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_to_vec(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_crc24(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc24");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| crc24(black_box(data)));
        });
    }
    group.finish();
}

fn bench_streaming_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_encode");
    let size = 1024 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("1MiB", |b| {
        b.iter(|| {
            let mut encoder = StreamingEncoder::new(Vec::with_capacity(size / 3 * 4 + 4));
            encoder.encode(&mut black_box(&data[..])).unwrap();
            encoder.into_inner()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_crc24,
    bench_streaming_encode
);
criterion_main!(benches);
