/// Errors returned by the sponge and the hashing interfaces built on it.
///
/// No operation retries or rolls back: a call that returns an error has not
/// changed the session it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `rate + capacity != 1600`, or `rate` is not a multiple of 64 in
    /// `0 < rate < 1600`.
    BadRateCapacity {
        /// Requested rate in bits.
        rate: usize,
        /// Requested capacity in bits.
        capacity: usize,
    },
    /// Absorb was called after squeezing started.
    ModeIsSqueezing,
    /// A previous absorb already supplied the single allowed partial byte.
    PartialBytesInMultipleAbsorbs,
    /// Output length in bits is not a whole number of bytes, or is not one
    /// of the supported digest lengths.
    BadHashLength(u64),
    /// A buffer is shorter than the bit length passed with it.
    BufferTooShort {
        /// Required byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadRateCapacity { rate, capacity } => {
                write!(f, "invalid rate/capacity: r = {rate}, c = {capacity}")
            }
            Self::ModeIsSqueezing => f.write_str("sponge is already squeezing"),
            Self::PartialBytesInMultipleAbsorbs => {
                f.write_str("only the last absorb may contain a partial byte")
            }
            Self::BadHashLength(bits) => write!(f, "unsupported output length: {bits} bits"),
            Self::BufferTooShort { expected, actual } => {
                write!(f, "buffer too short: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Number of bytes holding `bits` bits, saturating on 32-bit targets.
pub(crate) fn bytes_for_bits(bits: u64) -> usize {
    usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX)
}
