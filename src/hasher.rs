use crate::sponge::SpongeState;

/// Incremental Keccak hasher with the digest size selected by `S`.
///
/// ```
/// # use keccak_sponge::Keccak256;
/// let mut hasher = Keccak256::new();
/// hasher.update(b"hel");
/// hasher.update(b"lo");
/// assert_eq!(
///     "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
///     hex::encode(hasher.finalize())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Hasher<S: HashSize> {
    sponge: SpongeState,
    _size: core::marker::PhantomData<S>,
}

/// Marker type for 224-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out224;
/// Marker type for 256-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out256;
/// Marker type for 384-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out384;
/// Marker type for 512-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out512;

/// Keccak [`Hasher`] with 224-bit output.
pub type Keccak224 = Hasher<Out224>;
/// Keccak [`Hasher`] with 256-bit output.
pub type Keccak256 = Hasher<Out256>;
/// Keccak [`Hasher`] with 384-bit output.
pub type Keccak384 = Hasher<Out384>;
/// Keccak [`Hasher`] with 512-bit output.
pub type Keccak512 = Hasher<Out512>;

impl<S: HashSize> Hasher<S> {
    pub fn new() -> Self {
        let mut sponge = SpongeState::new(S::RATE, S::CAPACITY)
            .expect("digest sizes have a valid rate and capacity");
        sponge.set_fixed_output_length(Some(S::BITS));
        Hasher {
            sponge,
            _size: core::marker::PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.sponge.absorb_bytes(msg);
    }

    pub fn finalize(mut self) -> S::Output {
        let mut output = S::Output::default();
        self.sponge.squeeze(output.as_mut());
        output
    }
}

impl<S: HashSize> Default for Hasher<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(private_bounds)]
pub trait HashSize: Params {
    type Output: Output;
}

trait Params {
    /// Digest length in bits. The capacity is twice this.
    const BITS: u32;
    const CAPACITY: usize = 2 * Self::BITS as usize;
    const RATE: usize = 1600 - Self::CAPACITY;
}

impl HashSize for Out224 {
    type Output = [u8; 28];
}

impl Params for Out224 {
    const BITS: u32 = 224;
}

impl HashSize for Out256 {
    type Output = [u8; 32];
}

impl Params for Out256 {
    const BITS: u32 = 256;
}

impl HashSize for Out384 {
    type Output = [u8; 48];
}

impl Params for Out384 {
    const BITS: u32 = 384;
}

impl HashSize for Out512 {
    type Output = [u8; 64];
}

impl Params for Out512 {
    const BITS: u32 = 512;
}

// The normal Default trait is not implemented for arrays with len > 32, so we
// define this helper trait
pub trait Output: AsMut<[u8]> + private::Sealed {
    fn default() -> Self;
}

impl<const N: usize> Output for [u8; N] {
    fn default() -> Self {
        [0; N]
    }
}

mod private {
    impl<const N: usize> Sealed for [u8; N] {}

    pub trait Sealed {}
}
