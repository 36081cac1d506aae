//! Bit-oriented hashing interface in the style of the NIST SHA-3 competition
//! API.
//!
//! Unlike [`SpongeState::absorb`], [`HashState::update`] expects the bits of
//! a trailing partial byte in its *most* significant positions, which is the
//! convention of the Keccak known-answer files. They are shifted down before
//! reaching the sponge.
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, bytes_for_bits};
use crate::sponge::SpongeState;

/// Rate and capacity in bits for a digest length.
///
/// `0` selects the default KECCAK\[\] parameters with output of arbitrary
/// length. The other supported lengths are 224, 256, 384 and 512 bits.
pub fn rate_and_capacity(hash_bit_len: u32) -> Result<(usize, usize), Error> {
    match hash_bit_len {
        0 => Ok((1024, 576)),
        224 => Ok((1152, 448)),
        256 => Ok((1088, 512)),
        384 => Ok((832, 768)),
        512 => Ok((576, 1024)),
        other => Err(Error::BadHashLength(other.into())),
    }
}

/// Hashing session driving one [`SpongeState`] through
/// init, update and final.
#[derive(Clone)]
pub struct HashState {
    sponge: SpongeState,
}

impl HashState {
    /// Start a session producing `hash_bit_len` bits, or arbitrarily many
    /// when `hash_bit_len` is 0.
    pub fn init(hash_bit_len: u32) -> Result<Self, Error> {
        let (rate, capacity) = rate_and_capacity(hash_bit_len)?;
        let mut sponge = SpongeState::new(rate, capacity)?;
        sponge.set_fixed_output_length((hash_bit_len != 0).then_some(hash_bit_len));
        Ok(Self { sponge })
    }

    /// Absorb the first `data_bit_len` bits of `data`.
    ///
    /// When `data_bit_len` is not a multiple of 8 the remaining bits are the
    /// high-order bits of the last byte. Only the last update of a session
    /// may do this.
    pub fn update(&mut self, data: &[u8], data_bit_len: u64) -> Result<(), Error> {
        let expected = bytes_for_bits(data_bit_len);
        if data.len() < expected {
            return Err(Error::BufferTooShort {
                expected,
                actual: data.len(),
            });
        }
        let partial_bits = data_bit_len % 8;
        self.sponge.absorb(data, data_bit_len - partial_bits)?;

        if partial_bits > 0 {
            let mut last_byte = [data[expected - 1] >> (8 - partial_bits)];
            let res = self.sponge.absorb(&last_byte, partial_bits);
            last_byte.zeroize();
            res?;
        }
        Ok(())
    }

    /// Write the digest into `hash_val`.
    ///
    /// For a fixed-length session this squeezes the declared number of bits.
    /// For an arbitrary-length session it only pads the input; output is then
    /// read with [`HashState::squeeze`].
    pub fn finalize(&mut self, hash_val: &mut [u8]) -> Result<(), Error> {
        let bits = self.sponge.fixed_output_length().unwrap_or(0);
        self.sponge.squeeze_bits(hash_val, bits.into())
    }

    /// Squeeze the next `output_bit_len` bits into `output`.
    pub fn squeeze(&mut self, output: &mut [u8], output_bit_len: u64) -> Result<(), Error> {
        self.sponge.squeeze_bits(output, output_bit_len)
    }

    /// The underlying sponge.
    pub fn sponge(&self) -> &SpongeState {
        &self.sponge
    }
}

impl core::fmt::Debug for HashState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashState")
            .field("fixed_output_length", &self.sponge.fixed_output_length())
            .finish_non_exhaustive()
    }
}

impl Zeroize for HashState {
    fn zeroize(&mut self) {
        self.sponge.zeroize();
    }
}

// The sponge wipes itself when dropped.
impl ZeroizeOnDrop for HashState {}

/// Hash `data_bit_len` bits of `data` into `hash_val` with one of the fixed
/// digest lengths 224, 256, 384 or 512.
pub fn hash(
    hash_bit_len: u32,
    data: &[u8],
    data_bit_len: u64,
    hash_val: &mut [u8],
) -> Result<(), Error> {
    if hash_bit_len == 0 {
        return Err(Error::BadHashLength(0));
    }
    let mut state = HashState::init(hash_bit_len)?;
    state.update(data, data_bit_len)?;
    state.finalize(hash_val)
}
