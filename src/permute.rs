//! KECCAK-f\[1600\] permutation.
//!
//! The permutation works on a 5x5 array of 64-bit lanes. Lane `(x, y)` is
//! stored at index `x + 5 * y`, and the byte view of the state serializes
//! every lane as 8 little-endian bytes in that index order. The byte view is
//! computed explicitly, so the layout is the same on every target.
//!
//! Both constant tables are derived by `const fn`s from the generating
//! algorithms of the Keccak reference, so they are fixed at compile time.
#![allow(non_snake_case)]
use std::ops::{Index, IndexMut};

use zeroize::Zeroize;

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// Number of rounds performed by KECCAK-f\[1600\].
pub const ROUNDS: usize = 24;

/// Width of the permutation in bits.
pub const STATE_BITS: usize = 1600;

/// Width of the permutation in bytes.
pub const STATE_BYTES: usize = STATE_BITS / 8;

/// Lane of the [`State`] array containing w = 64 bits.
pub type Lane = u64;

/// State array A of KECCAK-f\[1600\]. Contains 1600 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State([Lane; 25]);

/// Compute a [`Lane`] index in [`State`].
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

impl Index<(usize, usize)> for State {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for State {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(x, y)]
    }
}

impl State {
    /// The all-zero state.
    pub const fn new() -> Self {
        Self([0; 25])
    }

    /// Build a state from its lanes, indexed by `x + 5 * y`.
    pub const fn from_lanes(lanes: [Lane; 25]) -> Self {
        Self(lanes)
    }

    /// Lanes of the state, indexed by `x + 5 * y`.
    pub fn lanes(&self) -> &[Lane; 25] {
        &self.0
    }

    /// Lane at `(x, y)`, both coordinates taken modulo 5.
    pub fn lane(&self, x: usize, y: usize) -> Lane {
        self[(x, y)]
    }

    /// Decode the 200-byte serialization of a state.
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut state = Self::new();
        state.xor_bytes(bytes);
        state
    }

    /// Encode the state as 200 bytes.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0; STATE_BYTES];
        self.extract_bytes(&mut bytes);
        bytes
    }

    /// XOR `data` into the leading bytes of the byte view of the state.
    ///
    /// # Panics
    /// If `data` is longer than [`STATE_BYTES`].
    pub fn xor_bytes(&mut self, data: &[u8]) {
        assert!(data.len() <= STATE_BYTES, "data exceeds KECCAK-f[1600] width");
        for (chunk, lane) in data.chunks(8).zip(self.0.iter_mut()) {
            let mut buf = [0; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *lane ^= Lane::from_le_bytes(buf);
        }
    }

    /// Copy the leading `out.len()` bytes of the byte view of the state.
    ///
    /// # Panics
    /// If `out` is longer than [`STATE_BYTES`].
    pub fn extract_bytes(&self, out: &mut [u8]) {
        assert!(out.len() <= STATE_BYTES, "output exceeds KECCAK-f[1600] width");
        for (chunk, lane) in out.chunks_mut(8).zip(self.0.iter()) {
            let len = chunk.len();
            chunk.copy_from_slice(&lane.to_le_bytes()[..len]);
        }
    }

    /// XOR one rate-sized block into the state, then permute.
    ///
    /// `block` holds `rate / 8` bytes.
    pub fn absorb_block(&mut self, block: &[u8]) {
        self.xor_bytes(block);
        self.permute();
    }

    /// Copy one rate-sized block out of the state into `out`.
    pub fn extract_block(&self, out: &mut [u8]) {
        self.extract_bytes(out);
    }

    /// 3.3 Algorithm 7: KECCAK-p\[b, nr\](S)
    ///
    /// Specialized to `b = 1600` and `nr = 24`, i.e. KECCAK-f\[1600\].
    pub fn permute(&mut self) {
        for round in 0..ROUNDS {
            theta(self);
            rho(self);
            pi(self);
            chi(self);
            iota(self, round);
        }
    }
}

impl Zeroize for State {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(A: &mut State) {
    // Parity of the 5 * 64 columns, one lane per sheet
    let mut C: [Lane; 5] = Default::default();
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx = A[(x, 0)] ^ A[(x, 1)] ^ A[(x, 2)] ^ A[(x, 3)] ^ A[(x, 4)];
    }

    for x in 0..5 {
        // (x + 4) % 5 is x - 1 modulo 5
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Table 2: rotation offsets modulo w = 64, indexed by `x + 5 * y`.
pub const RHO_OFFSETS: [u32; 25] = rho_offsets();

/// 3.2.2 Algorithm 2, steps 2 and 3: walk the orbit of `(1, 0)` under
/// `(x, y) -> (y, 2x + 3y)`. Lane `(0, 0)` keeps offset 0.
const fn rho_offsets() -> [u32; 25] {
    let mut offsets = [0; 25];
    let (mut x, mut y) = (1, 0);
    let mut t = 0;
    while t < 24 {
        offsets[x + 5 * y] = (((t + 1) * (t + 2) / 2) % 64) as u32;
        let new_y = (2 * x + 3 * y) % 5;
        x = y;
        y = new_y;
        t += 1;
    }
    offsets
}

/// 3.2.2 Algorithm 2: ρ(A)
///
/// Rotates every lane by the fixed offset of its position.
fn rho(A: &mut State) {
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = A[(x, y)].rotate_left(RHO_OFFSETS[x + 5 * y]);
        }
    }
}

/// 3.2.3 Algorithm 3: π(A)
///
/// Moves lane `(x, y)` to `(y, 2x + 3y)`. Reads from a full copy because
/// source and destination positions overlap.
fn pi(A: &mut State) {
    let temp_A = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[(y, 2 * x + 3 * y)] = temp_A[(x, y)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// The only non-linear step, applied row by row.
fn chi(A: &mut State) {
    let mut C: [Lane; 5] = Default::default();

    for y in 0..5 {
        for (x, Cx) in C.iter_mut().enumerate() {
            *Cx = A[(x, y)] ^ (!A[(x + 1, y)] & A[(x + 2, y)]);
        }
        for (x, Cx) in C.into_iter().enumerate() {
            A[(x, y)] = Cx;
        }
    }
}

/// Round constants applied to the (0, 0) lane in the [`iota`] step.
pub const ROUND_CONSTANTS: [Lane; ROUNDS] = round_constants();

/// One step of the LFSR with primitive polynomial x^8 + x^6 + x^5 + x^4 + 1.
///
/// Returns the output bit and the next register value.
const fn lfsr86540(lfsr: u8) -> (bool, u8) {
    let bit = lfsr & 0x01 != 0;
    let next = if lfsr & 0x80 != 0 {
        (lfsr << 1) ^ 0x71
    } else {
        lfsr << 1
    };
    (bit, next)
}

/// 3.2.5 Algorithm 5: rc(t), collected into one lane per round. Bit
/// `2^j - 1` of round `i` is the LFSR output `7 * i + j`.
const fn round_constants() -> [Lane; ROUNDS] {
    let mut constants = [0; ROUNDS];
    let mut lfsr = 0x01;
    let mut round = 0;
    while round < ROUNDS {
        let mut j = 0;
        while j < 7 {
            let (bit, next) = lfsr86540(lfsr);
            lfsr = next;
            if bit {
                constants[round] ^= (1 as Lane) << ((1 << j) - 1);
            }
            j += 1;
        }
        round += 1;
    }
    constants
}

/// 3.2.5 Algorithm 6: ι(A, ir)
fn iota(A: &mut State, round: usize) {
    A[(0, 0)] ^= ROUND_CONSTANTS[round];
}
