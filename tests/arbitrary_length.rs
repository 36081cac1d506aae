// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use keccak_sponge::{Error, Mode, nist::HashState};

use crate::rsp::KatSet;

mod rsp;

fn load() -> KatSet {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/arbitrary-length/Keccak_0ShortMsg.rsp",
    ));
    assert_eq!(0, kat_set.length);
    kat_set
}

#[test]
fn test_squeezed_vectors() {
    for test in load().tests {
        let mut state = HashState::init(0).unwrap();
        state.update(&test.msg, test.len).unwrap();
        state.finalize(&mut []).unwrap();
        let mut squeezed = [0; 512];
        state.squeeze(&mut squeezed, 4096).unwrap();
        assert_eq!(test.digest, hex::encode(squeezed), "length {} failed", test.len);
    }
}

#[test]
fn test_squeezed_vectors_in_pieces() {
    // Piece lengths in bytes, crossing the 128 byte rate at odd offsets
    let pieces = [1, 127, 3, 125, 0, 200, 56];
    assert_eq!(512, pieces.iter().sum::<usize>());

    for test in load().tests {
        let mut state = HashState::init(0).unwrap();
        state.update(&test.msg, test.len).unwrap();
        let mut squeezed = Vec::new();
        for piece in pieces {
            let mut out = vec![0; piece];
            state.squeeze(&mut out, piece as u64 * 8).unwrap();
            squeezed.extend(out);
        }
        assert_eq!(state.sponge().mode(), Mode::Squeezing);
        assert_eq!(test.digest, hex::encode(squeezed), "length {} failed", test.len);
        assert_eq!(state.update(&[], 0), Err(Error::ModeIsSqueezing));
    }
}
