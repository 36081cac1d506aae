//! Keccak Sponge Functions
//!
//! This crate provides a portable, pure Rust implementation of the KECCAK\[r, c\]
//! sponge construction over the KECCAK-f\[1600\] permutation, as submitted to
//! the SHA-3 competition. The digests are those of the original Keccak
//! submission, not the domain-separated SHA-3 functions of [FIPS 202].
//!
//! Three interfaces are layered on the same sponge:
//! - [`SpongeState`] absorbs any number of bits and squeezes any number of
//!   bytes for any valid rate and capacity.
//! - [`nist`] is a bit-oriented init/update/final API selecting the rate from
//!   a digest length, with the trailing bits of a message in the high-order
//!   end of its last byte.
//! - [`Hasher`] and the `keccak*` functions hash whole bytes into fixed-size
//!   arrays.
//!
//! # Limitations
//!
//! This software is intended as a learning exercise and not for production use.
//!
//! Performance has thus far not been a priority. This implementation is likely
//! orders of magnitude slower than optimized ones.
//!
//! # Example Usage
//! ```
//! # use keccak_sponge::{keccak256, SpongeState};
//! #
//! let hash: [u8; 32] = keccak256(b"hello");
//! let expected = "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8";
//! assert_eq!(expected, hex::encode(hash));
//!
//! // Arbitrary-length output from the default KECCAK[r = 1024, c = 576]
//! let mut sponge = SpongeState::new(1024, 576)?;
//! sponge.absorb(b"hello", 40)?;
//! let first = sponge.squeeze_to_vec(256)?;
//! let more = sponge.squeeze_to_vec(4096)?;
//! assert_eq!(first.len() + more.len(), 544);
//! # Ok::<(), keccak_sponge::Error>(())
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod error;
mod hasher;
pub mod nist;
pub mod permute;
mod sponge;

pub use crate::error::Error;
pub use crate::hasher::{
    HashSize, Hasher, Keccak224, Keccak256, Keccak384, Keccak512, Out224, Out256, Out384, Out512,
};
pub use crate::sponge::{MAX_RATE, Mode, SpongeState};

/// Keccak Hash with 224 bits (28 bytes) output.
pub fn keccak224(message: &[u8]) -> [u8; 28] {
    let mut hasher = Keccak224::new();
    hasher.update(message);
    hasher.finalize()
}

/// Keccak Hash with 256 bits (32 bytes) output.
pub fn keccak256(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(message);
    hasher.finalize()
}

/// Keccak Hash with 384 bits (48 bytes) output.
pub fn keccak384(message: &[u8]) -> [u8; 48] {
    let mut hasher = Keccak384::new();
    hasher.update(message);
    hasher.finalize()
}

/// Keccak Hash with 512 bits (64 bytes) output.
pub fn keccak512(message: &[u8]) -> [u8; 64] {
    let mut hasher = Keccak512::new();
    hasher.update(message);
    hasher.finalize()
}

#[cfg(test)]
mod tests {

    use crate::{SpongeState, keccak224, keccak256, keccak384, keccak512};

    #[test]
    fn can_hash() {
        let input = b"some input string";
        keccak256(&input[..]);
    }

    #[test]
    fn hello() {
        assert_eq!(
            "45524ec454bcc7d4b8f74350c4a4e62809fcb49bc29df62e61b69fa4",
            hex::encode(keccak224(b"hello"))
        );
        assert_eq!(
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            hex::encode(keccak256(b"hello"))
        );
        assert_eq!(
            "dcef6fb7908fd52ba26aaba75121526abbf1217f1c0a31024652d134d3e32fb4cd8e9c703b8f43e7277b59a5cd402175",
            hex::encode(keccak384(b"hello"))
        );
        assert_eq!(
            "52fa80662e64c128f8389c9ea6c73d4c02368004bf4463491900d11aaadca39d47de1b01361f207c512cfa79f0f92c3395c67ff7928e3f5ce3e3c852b392f976",
            hex::encode(keccak512(b"hello"))
        );
    }

    #[cfg(not(miri))]
    #[test]
    fn compare_to_tiny_keccak() {
        use tiny_keccak::{Hasher, Keccak};

        // Go beyond one block
        for i in 0..300 {
            let input = vec![0; i];
            let mut other = Keccak::v256();
            other.update(&input);
            let mut other_hash = [0; 32];
            other.finalize(&mut other_hash);
            assert_eq!(keccak256(&input), other_hash, "len {i} hash differs");
        }
    }

    /// Appending the SHA-3 domain bits `01` to the message turns the sponge
    /// into SHA3-256.
    #[cfg(not(miri))]
    #[test]
    fn compare_to_libcrux() {
        for i in 0..300 {
            let mut input = vec![0; i];
            let mut sponge = SpongeState::new(1088, 512).unwrap();
            input.push(0b10);
            sponge.absorb(&input, i as u64 * 8 + 2).unwrap();
            let mut my_hash = [0; 32];
            sponge.squeeze(&mut my_hash);
            let other_hash = libcrux_sha3::sha256(&input[..i]);
            assert_eq!(my_hash, other_hash.as_slice(), "len {i} hash differs");
        }
    }
}
