// benches/decrypt.rs
//! Decrypt-only benchmarks (pre-encrypted data)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shcrypt::{decrypt, derive_key_material, encrypt};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");
    let key = derive_key_material(b"benchmark-key-file");

    for &size in &[KB, 64 * KB, MB, 10 * MB] {
        // Pre-encrypt once, outside the timed loop
        let container = encrypt(&vec![0x41u8; size], &key).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| black_box(decrypt(black_box(&container), &key).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decrypt);
criterion_main!(benches);
