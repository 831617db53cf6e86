//! Shared deterministic test randomness.
//!
//! This crate's sampling routines are generic over [`rand_core::RngCore`] +
//! [`rand_core::CryptoRng`] rather than a platform entropy source (see
//! `src/rng.rs`), so integration tests need their own seeded source. This
//! wraps a `blake3` XOF the same way the crate's own unit tests do.

pub struct TestRng(blake3::OutputReader);

impl TestRng {
    pub fn seeded(seed: u64) -> Self {
        let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::tests::common::test_rng");
        hasher.update(&seed.to_le_bytes());
        TestRng(hasher.finalize_xof())
    }
}

impl rand_core::RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.0.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }
    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.0.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill(dest);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.fill(dest);
        Ok(())
    }
}

impl rand_core::CryptoRng for TestRng {}
