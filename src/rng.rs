//! Randomness boundary.
//!
//! The reference library this crate is modeled on takes randomness from a
//! caller-supplied `get_random_bytes(void*, size_t)` callback rather than
//! owning any entropy source itself — it never touches a platform RNG or a
//! syscall. The idiomatic Rust equivalent is a generic bound against
//! [`rand_core::RngCore`]: every sampling routine in this crate (`Fq`/`Fr`
//! rejection sampling, random curve-point generation, `PowersOfX::random`)
//! is generic over `R: RngCore + CryptoRng` rather than reaching for a
//! concrete RNG, so embedders keep full control over the entropy source.

pub use rand_core::{CryptoRng, RngCore};

/// Convenience alias for the bound every sampling routine in this crate uses.
pub trait SecureRng: RngCore + CryptoRng {}
impl<T: RngCore + CryptoRng> SecureRng for T {}
