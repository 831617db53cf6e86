//! LQIBE: the Lewko-Quinn identity-based encryption scheme built directly
//! atop the pairing, with identities hashed onto `G2` and ciphertexts on
//! `G1`. Grounded on the reference implementation's `lqibe::api` (`setup`,
//! `keygen`, `encrypt`, `decrypt`), which derives a symmetric key by hashing
//! the identity, the ciphertext's `G1` part and a `GT` pairing value
//! together — `encrypt` computes that pairing directly, `decrypt` recovers
//! the same value via bilinearity from the secret key instead.

extern crate alloc;

use crate::encoding::{self, G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE};
use crate::error::DecodeError;
use crate::fq12::Fq12;
use crate::fr::Fr;
use crate::g1::{self, Affine as G1Affine, G1Config};
use crate::g2::{self, Affine as G2Affine};
use crate::pairing;
use crate::rng::SecureRng;
use crate::curve::CurveConfig;

/// Public parameters: a generator `p` of `G1` and `sp = msk * p`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Params {
    /// Generator of `G1`.
    pub p: G1Affine,
    /// `msk * p`.
    pub sp: G1Affine,
}

/// An identity, hashed onto `G2` and cleared into the prime-order subgroup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Id {
    /// The identity's image on `G2`.
    pub q: G2Affine,
}

/// The master secret, a scalar in `Fr`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MasterKey {
    /// The master secret scalar.
    pub s: Fr,
}

/// A per-identity secret key, `msk * id.q`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SecretKey {
    /// `msk * id.q`.
    pub sq: G2Affine,
}

/// A ciphertext's asymmetric part, `r * p` for an ephemeral `r`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ciphertext {
    /// `r * p`.
    pub rp: G1Affine,
}

impl Id {
    /// Derives an identity from an arbitrary-length identifier by hashing it
    /// onto `G2` and clearing the cofactor, mirroring
    /// `compute_id_from_hash`.
    pub fn from_bytes(identity: &[u8]) -> Self {
        let q_affine = g2::try_and_increment(identity);
        let q = g2::clear_cofactor(&g2::Projective::from_affine(&q_affine));
        Id { q: q.to_affine() }
    }
}

/// Generates a fresh master key and public parameters.
pub fn setup(rng: &mut impl SecureRng) -> (Params, MasterKey) {
    let s = crate::fr::random(rng);
    let p = G1Config::generator();
    let sp = g1::multiply_glv(&p, &s).to_affine();
    (Params { p, sp }, MasterKey { s })
}

/// Derives the secret key for `id` under `msk`.
pub fn keygen(msk: &MasterKey, id: &Id) -> SecretKey {
    let sq = g2::multiply_gls(&id.q, &msk.s).to_affine();
    SecretKey { sq }
}

/// Serializes a `GT` element as the big-endian concatenation of its twelve
/// underlying `Fq` coordinates, in `c0`/`c1` (Fq12 over Fq6), `c0`/`c1`/`c2`
/// (Fq6 over Fq2) and `c0`/`c1` (Fq2 over Fq) order.
fn fq12_to_be_bytes(gt: &Fq12) -> [u8; 12 * 48] {
    let mut out = [0u8; 12 * 48];
    let coords = [
        &gt.c0.c0.c0, &gt.c0.c0.c1, &gt.c0.c1.c0, &gt.c0.c1.c1, &gt.c0.c2.c0, &gt.c0.c2.c1,
        &gt.c1.c0.c0, &gt.c1.c0.c1, &gt.c1.c1.c0, &gt.c1.c1.c1, &gt.c1.c2.c0, &gt.c1.c2.c1,
    ];
    for (i, coord) in coords.into_iter().enumerate() {
        coord.to_be_bytes(&mut out[i * 48..(i + 1) * 48]);
    }
    out
}

fn symmetric_key_buffer(q: &G2Affine, rp: &G1Affine, gt: &Fq12) -> alloc::vec::Vec<u8> {
    let mut buffer = alloc::vec::Vec::with_capacity(G2_COMPRESSED_SIZE + G1_COMPRESSED_SIZE + 12 * 48);
    buffer.extend_from_slice(&encoding::encode_g2_compressed(q));
    buffer.extend_from_slice(&encoding::encode_g1_compressed(rp));
    buffer.extend_from_slice(&fq12_to_be_bytes(gt));
    buffer
}

/// Derives a `length`-byte symmetric key for `id`, returning it alongside
/// the ciphertext's asymmetric part `rp`. Mirrors `encrypt`: draws a random
/// `r`, sets `rp = r*p`, pairs `r*sp` against `id.q` (equal to `e(p,q)^(rs)`
/// by bilinearity), and hashes `(id.q, rp, that pairing value)` with
/// `blake3`'s extendable output to the requested length.
pub fn encrypt(
    params: &Params,
    id: &Id,
    length: usize,
    rng: &mut impl SecureRng,
) -> (Ciphertext, alloc::vec::Vec<u8>) {
    let r = crate::fr::random(rng);
    let rp = g1::multiply_glv(&params.p, &r).to_affine();
    let rsp = g1::multiply_glv(&params.sp, &r).to_affine();
    let gt = pairing::pairing(&rsp, &id.q);

    let buffer = symmetric_key_buffer(&id.q, &rp, &gt);
    let symmetric = hash_fill(&buffer, length);
    (Ciphertext { rp }, symmetric)
}

/// Recovers the `length`-byte symmetric key for `ciphertext` using a secret
/// key for `id`. Mirrors `decrypt`: pairs `ciphertext.rp` against `sk.sq`
/// (equal to `e(p,q)^(rs)` by bilinearity, the same value `encrypt`
/// computed) and hashes the identical buffer shape.
pub fn decrypt(ciphertext: &Ciphertext, sk: &SecretKey, id: &Id, length: usize) -> alloc::vec::Vec<u8> {
    let gt = pairing::pairing(&ciphertext.rp, &sk.sq);
    let buffer = symmetric_key_buffer(&id.q, &ciphertext.rp, &gt);
    hash_fill(&buffer, length)
}

fn hash_fill(input: &[u8], length: usize) -> alloc::vec::Vec<u8> {
    let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::lqibe::symmetric_key");
    hasher.update(input);
    let mut xof = hasher.finalize_xof();
    let mut out = alloc::vec![0u8; length];
    xof.fill(&mut out);
    out
}

impl Params {
    /// Byte length of [`Params::to_bytes`]'s output.
    pub const ENCODED_LEN: usize = 2 * G1_COMPRESSED_SIZE;

    /// Encodes `p` and `sp` as two compressed `G1` points.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[..G1_COMPRESSED_SIZE].copy_from_slice(&encoding::encode_g1_compressed(&self.p));
        out[G1_COMPRESSED_SIZE..].copy_from_slice(&encoding::encode_g1_compressed(&self.sp));
        out
    }

    /// Decodes `Params` from [`Params::to_bytes`]'s output.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        let p = encoding::decode_g1_compressed(
            bytes[..G1_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        let sp = encoding::decode_g1_compressed(
            bytes[G1_COMPRESSED_SIZE..].try_into().unwrap(),
        )?;
        Ok(Params { p, sp })
    }
}

impl SecretKey {
    /// Byte length of [`SecretKey::to_bytes`]'s output.
    pub const ENCODED_LEN: usize = G2_COMPRESSED_SIZE;

    /// Encodes the secret key as a compressed `G2` point.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        encoding::encode_g2_compressed(&self.sq)
    }

    /// Decodes a secret key from [`SecretKey::to_bytes`]'s output.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        Ok(SecretKey {
            sq: encoding::decode_g2_compressed(bytes)?,
        })
    }
}

impl Ciphertext {
    /// Byte length of [`Ciphertext::to_bytes`]'s output.
    pub const ENCODED_LEN: usize = G1_COMPRESSED_SIZE;

    /// Encodes the ciphertext's asymmetric part as a compressed `G1` point.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        encoding::encode_g1_compressed(&self.rp)
    }

    /// Decodes a ciphertext from [`Ciphertext::to_bytes`]'s output.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        Ok(Ciphertext {
            rp: encoding::decode_g1_compressed(bytes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CryptoRng, RngCore};

    /// A `blake3`-XOF-backed deterministic RNG, since this crate never
    /// reaches for a platform entropy source itself (see [`crate::rng`]).
    struct TestRng(blake3::OutputReader);

    impl TestRng {
        fn seeded(seed: u64) -> Self {
            let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::lqibe::test_rng");
            hasher.update(&seed.to_le_bytes());
            TestRng(hasher.finalize_xof())
        }
    }

    impl RngCore for TestRng {
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

    impl CryptoRng for TestRng {}

    #[test]
    fn encrypt_then_decrypt_recovers_the_same_key() {
        let mut rng = TestRng::seeded(1);
        let (params, msk) = setup(&mut rng);
        let id = Id::from_bytes(b"alice@example.com");
        let sk = keygen(&msk, &id);

        let (ciphertext, key) = encrypt(&params, &id, 32, &mut rng);
        let recovered = decrypt(&ciphertext, &sk, &id, 32);
        assert_eq!(key, recovered);
    }

    #[test]
    fn wrong_identity_key_fails_to_recover() {
        let mut rng = TestRng::seeded(2);
        let (params, msk) = setup(&mut rng);
        let id = Id::from_bytes(b"alice@example.com");
        let other_id = Id::from_bytes(b"mallory@example.com");
        let sk_other = keygen(&msk, &other_id);

        let (ciphertext, key) = encrypt(&params, &id, 32, &mut rng);
        let recovered = decrypt(&ciphertext, &sk_other, &id, 32);
        assert_ne!(key, recovered);
    }

    #[test]
    fn params_roundtrip_through_bytes() {
        let mut rng = TestRng::seeded(3);
        let (params, _msk) = setup(&mut rng);
        let bytes = params.to_bytes();
        assert_eq!(Params::from_bytes(&bytes).unwrap(), params);
    }

    #[test]
    fn secret_key_roundtrips_through_bytes() {
        let mut rng = TestRng::seeded(4);
        let (_params, msk) = setup(&mut rng);
        let id = Id::from_bytes(b"bob@example.com");
        let sk = keygen(&msk, &id);
        let bytes = sk.to_bytes();
        assert_eq!(SecretKey::from_bytes(&bytes).unwrap(), sk);
    }
}
