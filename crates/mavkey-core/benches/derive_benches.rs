//! Criterion benchmarks for mavkey-core critical operations.
//!
//! Covers: full mnemonic-to-record derivation (dominated by the 2048
//! PBKDF2 iterations), the SLIP-0010 path walk, and Base58Check encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mavkey_core::constants::PREFIX_SECRET_KEY;
use mavkey_core::derive::derive_account_key;
use mavkey_core::{base58, Seed, WalletDeriver};

const VECTOR_12: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn bench_full_pipeline(c: &mut Criterion) {
    let deriver = WalletDeriver::new();
    c.bench_function("derive_wallet_record", |b| {
        b.iter(|| deriver.derive(black_box(VECTOR_12)).unwrap())
    });
}

fn bench_path_walk(c: &mut Criterion) {
    let seed = Seed::from_bytes([0x42; 64]);
    c.bench_function("slip0010_account_path", |b| {
        b.iter(|| derive_account_key(black_box(&seed)))
    });
}

fn bench_base58check(c: &mut Criterion) {
    let payload = [0xAB; 64];
    c.bench_function("base58check_encode_64", |b| {
        b.iter(|| base58::encode(black_box(&PREFIX_SECRET_KEY), black_box(&payload)))
    });
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_path_walk,
    bench_base58check
);
criterion_main!(benches);
