use std::hint::black_box;

use haste::{Haste, Label};
use keccak_sponge::{SpongeState, keccak256};

fn main() {
    haste::main();
}

#[haste::bench]
fn bench_keccak256(mut haste: Haste) {
    let sizes = [1024, 1024 * 1024];
    for size in sizes {
        let input = vec![0; size];
        haste
            .with_throughput(haste::Throughput::Bytes(size))
            .with_sample_count(50)
            .bench(Label::new("keccak256").with_part(size), || {
                keccak256(black_box(&input))
            });
    }
}

#[haste::bench]
fn bench_tiny_keccak256(mut haste: Haste) {
    use tiny_keccak::{Hasher, Keccak};

    let sizes = [1024, 1024 * 1024];
    for size in sizes {
        let input = vec![0; size];
        haste
            .with_throughput(haste::Throughput::Bytes(size))
            .with_sample_count(50)
            .bench(Label::new("tiny-keccak keccak256").with_part(size), || {
                let mut hasher = Keccak::v256();
                hasher.update(black_box(&input));
                let mut output = [0; 32];
                hasher.finalize(&mut output);
                output
            });
    }
}

#[haste::bench]
fn bench_squeeze(mut haste: Haste) {
    let sizes = [1024, 1024 * 1024];
    for size in sizes {
        haste
            .with_throughput(haste::Throughput::Bytes(size))
            .with_sample_count(50)
            .bench(Label::new("squeeze r=1024").with_part(size), || {
                let mut sponge = SpongeState::new(1024, 576).unwrap();
                sponge.squeeze_to_vec(black_box(size as u64 * 8)).unwrap()
            });
    }
}
