use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cfscmd_core::{
    decoder::decode_command, encoder::encode_command_with, payload::display_param_payload,
    ChecksumAlgorithm,
};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [0, 38, 256, 1024, 8192] {
        let payload = vec![0x42u8; size];

        group.throughput(Throughput::Bytes(size as u64 + 8));
        for alg in [ChecksumAlgorithm::XorFold, ChecksumAlgorithm::AdditiveFold] {
            group.bench_with_input(BenchmarkId::new(alg.name(), size), &payload, |b, data| {
                b.iter(|| encode_command_with(alg, 0x1882, 3, black_box(data), 1));
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [0, 38, 256, 1024, 8192] {
        let payload = vec![0x42u8; size];
        let encoded = encode_command_with(ChecksumAlgorithm::XorFold, 0x1882, 3, &payload, 1);

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, data| {
            b.iter(|| decode_command(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_display_param_payload(c: &mut Criterion) {
    c.bench_function("display_param_payload", |b| {
        b.iter(|| display_param_payload(black_box(7), black_box(-3), black_box("telemetry")))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_display_param_payload);
criterion_main!(benches);
