//! Mode-of-operation benchmarks.
//!
//! Run with: cargo bench -p aesmodes-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [1024, 16384, 1048576];

// ---------------------------------------------------------------------------
// AES block benchmarks
// ---------------------------------------------------------------------------

fn bench_aes(c: &mut Criterion) {
    use aesmodes_crypto::aes::AesKey;

    let mut group = c.benchmark_group("aes-128");
    let key: Vec<u8> = (0..16).collect();
    let cipher = AesKey::new(&key).unwrap();

    let mut block = [0u8; 16];
    group.bench_function("encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(&mut block).unwrap());
    });

    let mut block = [0u8; 16];
    group.bench_function("decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(&mut block).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Padded modes
// ---------------------------------------------------------------------------

fn bench_ecb_cbc(c: &mut Criterion) {
    use aesmodes_crypto::modes::cbc::{cbc_decrypt, cbc_encrypt};
    use aesmodes_crypto::modes::ecb::{ecb_decrypt, ecb_encrypt};

    let mut group = c.benchmark_group("aes-128-ecb-cbc");
    let key = [0x42u8; 16];
    let iv = [0x24u8; 16];

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let plaintext = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("ecb/encrypt", size), &size, |b, _| {
            b.iter(|| ecb_encrypt(&key, &plaintext).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("ecb/decrypt", size), &size, |b, _| {
            let ct = ecb_encrypt(&key, &plaintext).unwrap();
            b.iter(|| ecb_decrypt(&key, &ct).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("cbc/encrypt", size), &size, |b, _| {
            b.iter(|| cbc_encrypt(&key, &iv, &plaintext).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("cbc/decrypt", size), &size, |b, _| {
            let ct = cbc_encrypt(&key, &iv, &plaintext).unwrap();
            b.iter(|| cbc_decrypt(&key, &iv, &ct).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Counter modes
// ---------------------------------------------------------------------------

fn bench_ctr(c: &mut Criterion) {
    use aesmodes_crypto::modes::ctr::ctr_crypt;

    let mut group = c.benchmark_group("aes-128-ctr");
    let key = [0x42u8; 16];
    let iv = [0u8; 16];

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let mut data = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("crypt", size), &size, |b, _| {
            b.iter(|| ctr_crypt(&key, &iv, &mut data).unwrap());
        });
    }

    group.finish();
}

fn bench_ccm(c: &mut Criterion) {
    use aesmodes_crypto::modes::ccm::{ccm_decrypt, ccm_encrypt};

    let mut group = c.benchmark_group("aes-128-ccm");
    let key = [0x42u8; 16];
    let nonce = [0u8; 12];
    let aad = b"benchmark";

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let plaintext = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("encrypt", size), &size, |b, _| {
            b.iter(|| ccm_encrypt(&key, &nonce, aad, &plaintext).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), &size, |b, _| {
            // Pre-encrypt to get valid ciphertext + tag
            let ct_with_tag = ccm_encrypt(&key, &nonce, aad, &plaintext).unwrap();

            b.iter(|| ccm_decrypt(&key, &nonce, aad, &ct_with_tag).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aes, bench_ecb_cbc, bench_ctr, bench_ccm);
criterion_main!(benches);
