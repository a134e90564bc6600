use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;
use zipe::traits::{PEAuthority, PEFunctionalKey};
use zipe::{MasterSecret, Preset};

const SIZES: [usize; 6] = [5, 10, 20, 50, 100, 1000];
const MESSAGE: &[u8] = b"Hello, ABE!";

// f = [1, ..., 1], x = [1, 2, ..., n - 1, -(n(n - 1) / 2)]
fn vectors(n: usize) -> (Vec<BigInt>, Vec<BigInt>) {
    let policy = vec![BigInt::from(1u8); n];
    let mut attributes: Vec<BigInt> = (1..=n).map(BigInt::from).collect();
    attributes[n - 1] = -BigInt::from(n * (n - 1) / 2);
    (policy, attributes)
}

fn bench_zipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZIPE P128");
    let modulus = Preset::P128.modulus();
    let mut rng = StdRng::from_entropy();

    for n in SIZES {
        let msk = MasterSecret::setup_with_rng(&mut rng, &modulus, n as i64).unwrap();
        let (policy, attributes) = vectors(n);

        group.bench_with_input(BenchmarkId::new("KeyGen", n), &policy, |b, policy| {
            b.iter(|| msk.key_gen(black_box(policy)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("Encrypt", n), &attributes, |b, attributes| {
            b.iter(|| {
                msk.encrypt_with_rng(&mut rng, black_box(attributes), MESSAGE)
                    .unwrap()
            })
        });

        let sk = msk.key_gen(&policy).unwrap();
        let ct = msk.encrypt_with_rng(&mut rng, &attributes, MESSAGE).unwrap();

        group.bench_with_input(BenchmarkId::new("Decrypt", n), &attributes, |b, attributes| {
            b.iter(|| sk.decrypt(black_box(attributes), black_box(&ct)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_zipe);
criterion_main!(benches);
