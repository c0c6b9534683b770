//! p192-ecdsa benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use p192_ecdsa::{KeyPair, NistP192, PrivateKey, RngSource, Signer, Verifier};
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
use std::hint::black_box;

const SIGNING_KEY_BYTES: [u8; 24] = hex!("e14f37b3d1374ff8b03f41b9b3fdd2f0ebccf275d660d7f3");

const MESSAGE: &[u8] = b"Hello, world!";

fn key_pair() -> KeyPair<NistP192> {
    let private_key = PrivateKey::from_bytes(&SIGNING_KEY_BYTES).unwrap();
    KeyPair::from_private_key(private_key).unwrap()
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDSA/P-192 (SHA-256)");
    let key_pair = key_pair();
    let mut rng = RngSource::new(ChaCha20Rng::seed_from_u64(0));

    group.bench_function("public key", |b| {
        b.iter(|| black_box(key_pair.private_key()).public_key().unwrap())
    });

    let signer = Signer::new(key_pair.private_key());
    group.bench_function("sign", |b| {
        b.iter(|| signer.sign(&mut rng, black_box(MESSAGE)).unwrap())
    });

    let signature = signer.sign(&mut rng, MESSAGE).unwrap();
    let verifier = Verifier::new(key_pair.public_key());
    group.bench_function("verify", |b| {
        b.iter(|| verifier.verify(black_box(MESSAGE), black_box(&signature)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
