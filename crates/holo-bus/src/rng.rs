//! Deterministic PRNG and hash seeding for spectrum synthesis.
//!
//! [`Mulberry32`] is created fresh for every encode call and threaded
//! through explicitly; there is no shared generator.

/// 32-bit FNV-1a offset basis.
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// 32-bit FNV-1a prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of a byte string.
///
/// # Example
///
/// ```
/// use holo_bus::rng::fnv1a_32;
///
/// assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
/// ```
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Deterministic PRNG with the mulberry32 output contract.
///
/// # Example
///
/// ```
/// use holo_bus::rng::Mulberry32;
///
/// let mut rng = Mulberry32::new(1);
/// assert_eq!(rng.next_u32(), 2_693_262_067);
/// let x = rng.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct Mulberry32(u32);

impl Mulberry32 {
    /// Creates a new generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Returns the next pseudo-random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(0x6d2b_79f5);
        let mut t = self.0;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns a uniform f64 in [0, 1) with 32 bits of resolution.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}
