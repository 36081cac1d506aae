//! KECCAK\[r, c\] sponge with an incremental, bit-granular API.
//!
//! Input is staged in a queue of at most one rate-sized block. Full blocks
//! are absorbed straight from the caller's buffer when the queue is empty.
//! The first squeeze applies the multi-rate padding `pad10*1` and switches
//! the sponge to squeezing; later squeezes continue where the previous one
//! stopped.
use std::cmp;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, bytes_for_bits};
use crate::permute::{STATE_BITS, State};

/// Largest rate supported by KECCAK-f\[1600\] with a 64-bit aligned capacity.
pub const MAX_RATE: usize = 1536;

const QUEUE_BYTES: usize = MAX_RATE / 8;

/// Phase of a [`SpongeState`]. Moves from absorbing to squeezing once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Absorbing,
    Squeezing,
}

/// State of one KECCAK\[r, c\] computation.
///
/// Not meant to be shared between concurrent writers; every mutating method
/// takes `&mut self`. State and queue are wiped on drop.
#[derive(Clone)]
pub struct SpongeState {
    state: State,
    /// Input bits waiting for a full block, or extracted output bits.
    queue: [u8; QUEUE_BYTES],
    rate: usize,
    capacity: usize,
    /// Valid input bits in `queue` while absorbing.
    bits_in_queue: usize,
    /// Unread output bits at the end of `queue` while squeezing.
    bits_available_for_squeezing: usize,
    fixed_output_length: Option<u32>,
    mode: Mode,
}

impl SpongeState {
    /// Start a sponge with the given rate and capacity in bits.
    ///
    /// `rate + capacity` must be 1600 and `rate` a multiple of 64 with
    /// `0 < rate < 1600`.
    pub fn new(rate: usize, capacity: usize) -> Result<Self, Error> {
        if rate.checked_add(capacity) != Some(STATE_BITS)
            || rate == 0
            || rate >= STATE_BITS
            || rate % 64 != 0
        {
            return Err(Error::BadRateCapacity { rate, capacity });
        }
        Ok(Self {
            state: State::new(),
            queue: [0; QUEUE_BYTES],
            rate,
            capacity,
            bits_in_queue: 0,
            bits_available_for_squeezing: 0,
            fixed_output_length: None,
            mode: Mode::Absorbing,
        })
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bits_in_queue(&self) -> usize {
        self.bits_in_queue
    }

    pub fn bits_available_for_squeezing(&self) -> usize {
        self.bits_available_for_squeezing
    }

    /// Digest length declared by a fixed-output interface, `None` when the
    /// caller chooses the output length.
    pub fn fixed_output_length(&self) -> Option<u32> {
        self.fixed_output_length
    }

    pub(crate) fn set_fixed_output_length(&mut self, bits: Option<u32>) {
        self.fixed_output_length = bits;
    }

    fn rate_in_bytes(&self) -> usize {
        self.rate / 8
    }

    /// Absorb the first `data_bit_len` bits of `data`.
    ///
    /// If `data_bit_len` is not a multiple of 8, the last byte holds the
    /// remaining bits in its least significant positions and its other bits
    /// are ignored. Only the last absorb call of a session may do this.
    pub fn absorb(&mut self, data: &[u8], data_bit_len: u64) -> Result<(), Error> {
        if self.mode == Mode::Squeezing {
            return Err(Error::ModeIsSqueezing);
        }
        if self.bits_in_queue % 8 != 0 {
            return Err(Error::PartialBytesInMultipleAbsorbs);
        }
        let expected = bytes_for_bits(data_bit_len);
        if data.len() < expected {
            return Err(Error::BufferTooShort {
                expected,
                actual: data.len(),
            });
        }
        self.absorb_bits(&data[..expected], data_bit_len);
        Ok(())
    }

    /// Absorb whole bytes. Only valid while absorbing on a byte boundary.
    pub(crate) fn absorb_bytes(&mut self, data: &[u8]) {
        debug_assert_eq!(self.mode, Mode::Absorbing);
        debug_assert_eq!(self.bits_in_queue % 8, 0);
        self.absorb_bits(data, data.len() as u64 * 8);
    }

    /// `data` holds exactly `ceil(bit_len / 8)` bytes.
    fn absorb_bits(&mut self, data: &[u8], bit_len: u64) {
        let rate = self.rate as u64;
        let rate_in_bytes = self.rate_in_bytes();
        let mut absorbed: u64 = 0;

        while absorbed < bit_len {
            let remaining = bit_len - absorbed;
            let offset = (absorbed / 8) as usize;

            if self.bits_in_queue == 0 && remaining >= rate {
                // Queue is empty: take whole blocks straight from the input
                let whole_blocks = (remaining / rate) as usize;
                let blocks = &data[offset..offset + whole_blocks * rate_in_bytes];
                for block in blocks.chunks_exact(rate_in_bytes) {
                    self.state.absorb_block(block);
                }
                absorbed += whole_blocks as u64 * rate;
            } else {
                let room = (self.rate - self.bits_in_queue) as u64;
                let partial_block = cmp::min(remaining, room);
                let partial_byte = (partial_block % 8) as usize;
                let whole_bytes = (partial_block / 8) as usize;

                let start = self.bits_in_queue / 8;
                self.queue[start..start + whole_bytes]
                    .copy_from_slice(&data[offset..offset + whole_bytes]);
                self.bits_in_queue += whole_bytes * 8;
                absorbed += whole_bytes as u64 * 8;

                if self.bits_in_queue == self.rate {
                    self.state.absorb_block(&self.queue[..rate_in_bytes]);
                    self.bits_in_queue = 0;
                }

                // Trailing bits of the last input byte, kept LSB-aligned
                if partial_byte > 0 {
                    let mask = (1u8 << partial_byte) - 1;
                    self.queue[self.bits_in_queue / 8] = data[(absorbed / 8) as usize] & mask;
                    self.bits_in_queue += partial_byte;
                    absorbed += partial_byte as u64;
                }
            }
        }
    }

    /// Apply `pad10*1` to the queued input, absorb the result and extract
    /// the first output block.
    fn pad_and_switch_to_squeezing(&mut self) {
        debug_assert_eq!(self.mode, Mode::Absorbing);
        let rate_in_bytes = self.rate_in_bytes();
        let queued = self.bits_in_queue;

        if queued + 1 == self.rate {
            // The first 1 fills the block; the final 1 needs a block of its own
            self.queue[queued / 8] |= 1 << (queued % 8);
            self.state.absorb_block(&self.queue[..rate_in_bytes]);
            self.queue[..rate_in_bytes].fill(0);
        } else {
            self.queue[queued.div_ceil(8)..rate_in_bytes].fill(0);
            self.queue[queued / 8] |= 1 << (queued % 8);
        }
        self.queue[(self.rate - 1) / 8] |= 1 << ((self.rate - 1) % 8);
        self.state.absorb_block(&self.queue[..rate_in_bytes]);
        self.bits_in_queue = 0;

        self.state.extract_block(&mut self.queue[..rate_in_bytes]);
        self.bits_available_for_squeezing = self.rate;
        self.mode = Mode::Squeezing;
    }

    /// Fill `output` with the next `output.len()` bytes of the sponge output.
    ///
    /// The first call pads the absorbed input, even if `output` is empty.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        if self.mode == Mode::Absorbing {
            self.pad_and_switch_to_squeezing();
        }
        let rate_in_bytes = self.rate_in_bytes();

        let mut squeezed = 0;
        while squeezed < output.len() {
            if self.bits_available_for_squeezing == 0 {
                self.state.permute();
                self.state.extract_block(&mut self.queue[..rate_in_bytes]);
                self.bits_available_for_squeezing = self.rate;
            }
            let available = self.bits_available_for_squeezing / 8;
            let len = cmp::min(available, output.len() - squeezed);
            let start = rate_in_bytes - available;
            output[squeezed..squeezed + len].copy_from_slice(&self.queue[start..start + len]);
            self.bits_available_for_squeezing -= len * 8;
            squeezed += len;
        }
    }

    /// Squeeze `output_bit_len` bits into the front of `output`.
    ///
    /// Only whole bytes can be squeezed; truncating to a bit length is left
    /// to the caller.
    pub fn squeeze_bits(&mut self, output: &mut [u8], output_bit_len: u64) -> Result<(), Error> {
        if output_bit_len % 8 != 0 {
            return Err(Error::BadHashLength(output_bit_len));
        }
        let expected = bytes_for_bits(output_bit_len);
        if output.len() < expected {
            return Err(Error::BufferTooShort {
                expected,
                actual: output.len(),
            });
        }
        self.squeeze(&mut output[..expected]);
        Ok(())
    }

    /// Squeeze `output_bit_len` bits into a new buffer.
    pub fn squeeze_to_vec(&mut self, output_bit_len: u64) -> Result<Vec<u8>, Error> {
        if output_bit_len % 8 != 0 {
            return Err(Error::BadHashLength(output_bit_len));
        }
        let mut output = vec![0; bytes_for_bits(output_bit_len)];
        self.squeeze(&mut output);
        Ok(output)
    }
}

impl core::fmt::Debug for SpongeState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpongeState")
            .field("rate", &self.rate)
            .field("capacity", &self.capacity)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Zeroize for SpongeState {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.queue.zeroize();
        self.bits_in_queue.zeroize();
        self.bits_available_for_squeezing.zeroize();
    }
}

impl Drop for SpongeState {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SpongeState {}
