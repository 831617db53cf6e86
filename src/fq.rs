//! The base field `Fq`, a 381-bit prime field stored in 6 64-bit limbs.

use crate::bigint::BigInt;
use crate::fp::{Fp, MontConfig};
use crate::rng::SecureRng;

/// Limb count for `Fq`.
pub const LIMBS: usize = 6;

/// Montgomery parameters for the BLS12-381 base field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FqConfig;

impl MontConfig<LIMBS> for FqConfig {
    const MODULUS: BigInt<LIMBS> = BigInt::new([
        0xb9fe_ffff_ffff_aaab,
        0x1eab_fffe_b153_ffff,
        0x6730_d2a0_f6b0_f624,
        0x6477_4b84_f385_12bf,
        0x4b1b_a7b6_434b_acd7,
        0x1a01_11ea_397f_e69a,
    ]);
    const R: BigInt<LIMBS> = BigInt::new([
        0x7609_0000_0002_fffd,
        0xebf4_000b_c40c_0002,
        0x5f48_9857_53c7_58ba,
        0x77ce_5853_7052_5745,
        0x5c07_1a97_a256_ec6d,
        0x15f6_5ec3_fa80_e493,
    ]);
    const R2: BigInt<LIMBS> = BigInt::new([
        0xf4df_1f34_1c34_1746,
        0x0a76_e6a6_09d1_04f1,
        0x8de5_476c_4c95_b6d5,
        0x67eb_88a9_939d_83c0,
        0x9a79_3e85_b519_952d,
        0x1198_8fe5_92ca_e3aa,
    ]);
    const INV: u64 = 0x89f3_fffc_fffc_fffd;
    // A fixed quadratic non-residue of Fq, used to build Fq2 = Fq[u]/(u^2+1)
    // and as the base for the tower's further non-residues.
    const NONRESIDUE: BigInt<LIMBS> = BigInt::new([1, 0, 0, 0, 0, 0]);
}

/// An element of the BLS12-381 base field.
pub type Fq = Fp<FqConfig, LIMBS>;

/// `-1` in `Fq`, used throughout the curve and tower code as a building
/// block (e.g. negating the `y` coordinate during decompression).
pub fn negative_one() -> Fq {
    Fq::ZERO.sub(&Fq::ONE)
}

/// `(p + 1) / 4`-exponent square root, valid because `p ≡ 3 (mod 4)` for the
/// BLS12-381 base field: if `a` is a nonzero quadratic residue then
/// `a^((p+1)/4)` is one of its two square roots.
pub fn square_root(a: &Fq) -> Option<Fq> {
    if a.is_zero() {
        return Some(Fq::ZERO);
    }
    if a.legendre() != 1 {
        return None;
    }
    // exponent = (p + 1) / 4, computed once from the modulus.
    let exp = exponent_p_plus_1_over_4();
    let root = a.pow(&exp.0);
    Some(root)
}

fn exponent_p_plus_1_over_4() -> BigInt<LIMBS> {
    let p = FqConfig::MODULUS;
    let (sum, _carry) = p.add_with_carry(&BigInt::new([1, 0, 0, 0, 0, 0]));
    sum.shr1().shr1()
}

/// Draws a uniform `Fq` element by rejecting samples `>= p`. The BLS12-381
/// base field needs 381 bits, so 3 bits of the top limb are always masked.
pub fn random(rng: &mut impl SecureRng) -> Fq {
    crate::fp::random_fp::<FqConfig, LIMBS>(rng, 381)
}

/// Hashes an arbitrary-length message into `Fq` via rejection sampling over
/// a `blake3`-keyed extendable output stream, returning the element together
/// with the "greater" bit (whether the canonical integer exceeds `(p-1)/2`)
/// that the point-decompression flag needs when this is used to recover a
/// `y` coordinate from hashed randomness.
pub fn hash_reduce(parts: &[&[u8]]) -> (Fq, bool) {
    let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::fq::hash_reduce");
    for part in parts {
        hasher.update(part);
    }
    let mut xof = hasher.finalize_xof();
    loop {
        let mut bytes = [0u8; 8 * LIMBS];
        xof.fill(&mut bytes);
        let mut limbs = [0u64; LIMBS];
        for i in 0..LIMBS {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            limbs[i] = u64::from_le_bytes(word);
        }
        limbs[LIMBS - 1] &= u64::MAX >> 3;
        let candidate = BigInt::new(limbs);
        if candidate.cmp(&FqConfig::MODULUS) == core::cmp::Ordering::Less {
            let greater = is_greater_than_half_modulus(&candidate);
            return (Fq::from_canonical(candidate), greater);
        }
    }
}

fn is_greater_than_half_modulus(x: &BigInt<LIMBS>) -> bool {
    // half = (p - 1) / 2
    let p = FqConfig::MODULUS;
    let (p_minus_1, _) = p.sub_with_borrow(&BigInt::new([1, 0, 0, 0, 0, 0]));
    let half = p_minus_1.shr1();
    x.cmp(&half) == core::cmp::Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_squared_is_one() {
        assert_eq!(Fq::ONE.square(), Fq::ONE);
    }

    #[test]
    fn square_root_of_square_is_a_root() {
        let a = Fq::from_canonical(BigInt::new([7, 0, 0, 0, 0, 0]));
        let a2 = a.square();
        let root = square_root(&a2).expect("quadratic residue must have a root");
        assert_eq!(root.square(), a2);
    }

    #[test]
    fn negative_one_negated_is_one() {
        assert_eq!(negative_one().neg(), Fq::ONE);
    }

    #[test]
    fn inverse_roundtrips() {
        let a = Fq::from_canonical(BigInt::new([123456, 0, 0, 0, 0, 0]));
        let inv = a.inverse();
        assert_eq!(a.mul(&inv), Fq::ONE);
    }
}
