use blowfish::Blowfish;
use cipher_modes::{CipherModes, Padding};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn key_schedule_benchmark(c: &mut Criterion) {
    c.bench_function("blowfish key schedule", |b| {
        b.iter(|| Blowfish::new(black_box(b"testkey123")))
    });
}

fn cbc_benchmark(c: &mut Criterion) {
    let cipher = Blowfish::new(b"benchmark key").unwrap();
    let iv = [0x42u8; 8];
    let data = vec![0xa5u8; 64 * 1024];
    let ciphertext = CipherModes::cbc_encrypt(&cipher, &data, &iv, Padding::Zero).unwrap();

    let mut group = c.benchmark_group("blowfish-cbc");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encrypt 64KiB", |b| {
        b.iter(|| CipherModes::cbc_encrypt(&cipher, black_box(&data), &iv, Padding::Zero))
    });
    group.bench_function("decrypt 64KiB", |b| {
        b.iter(|| CipherModes::cbc_decrypt(&cipher, black_box(&ciphertext), &iv, Padding::Zero))
    });
    group.finish();
}

criterion_group!(benches, key_schedule_benchmark, cbc_benchmark);
criterion_main!(benches);
