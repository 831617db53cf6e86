//! The scalar field `Fr`, a 255-bit prime field stored in 4 64-bit limbs.

use crate::bigint::BigInt;
use crate::error::TonelliShanksError;
use crate::fp::{Fp, MontConfig};
use crate::rng::SecureRng;

/// Limb count for `Fr`.
pub const LIMBS: usize = 4;

/// Montgomery parameters for the BLS12-381 scalar field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FrConfig;

impl MontConfig<LIMBS> for FrConfig {
    const MODULUS: BigInt<LIMBS> = BigInt::new([
        0xffff_ffff_0000_0001,
        0x53bd_a402_fffe_5bfe,
        0x3339_d808_09a1_d805,
        0x73ed_a753_299d_7d48,
    ]);
    const R: BigInt<LIMBS> = BigInt::new([
        0x0000_0001_ffff_fffe,
        0x5884_b7fa_0003_4802,
        0x998c_4fef_ecbc_4ff5,
        0x1824_b159_acc5_056f,
    ]);
    const R2: BigInt<LIMBS> = BigInt::new([
        0xc999_e990_f3f2_9c6d,
        0x2b6c_edcb_8792_5c23,
        0x05d3_1496_7254_398f,
        0x0748_d9d9_9f59_ff11,
    ]);
    const INV: u64 = 0xffff_fffe_ffff_ffff;
    // A fixed non-residue of Fr (5 is the smallest one). Used by the
    // quadratic-character-based PowersOfX decomposition's random() rejection
    // path and by square_root below.
    const NONRESIDUE: BigInt<LIMBS> = BigInt::new([5, 0, 0, 0]);
}

/// An element of the BLS12-381 scalar field. This is also the field the
/// pairing's target group's exponent lattice (GLV/GLS decomposition) and
/// WKD-IBE/LQIBE secret exponents live in.
pub type Fr = Fp<FrConfig, LIMBS>;

/// `-1` in `Fr`.
pub fn negative_one() -> Fr {
    Fr::ZERO.sub(&Fr::ONE)
}

/// The 2-adicity of `r - 1`: `r - 1 = 2^32 * t` with `t` odd. Bounds the
/// Tonelli-Shanks loop below.
const TWO_ADICITY: u32 = 32;

/// Full Tonelli-Shanks square root (the scalar field's `r ≡ 1 (mod 4)`, so
/// the `Fq`-style `(p+1)/4` shortcut does not apply here).
pub fn square_root(a: &Fr) -> Result<Option<Fr>, TonelliShanksError> {
    if a.is_zero() {
        return Ok(Some(Fr::ZERO));
    }
    if a.legendre() != 1 {
        return Ok(None);
    }

    // r - 1 = q * 2^s, q odd.
    let (q, s) = odd_part_and_shift(FrConfig::MODULUS);
    debug_assert_eq!(s, TWO_ADICITY);

    let z = Fr::from_canonical(FrConfig::NONRESIDUE);
    let mut m = s;
    let mut c = z.pow(&q.0);
    let mut t = a.pow(&q.0);
    let q_plus_1_over_2 = {
        let (sum, _) = q.add_with_carry(&BigInt::new([1, 0, 0, 0]));
        sum.shr1()
    };
    let mut r = a.pow(&q_plus_1_over_2.0);

    let mut iterations = 0u32;
    loop {
        if t == Fr::ONE {
            return Ok(Some(r));
        }
        let mut i = 0u32;
        let mut t2 = t;
        while t2 != Fr::ONE {
            t2 = t2.square();
            i += 1;
            if i >= m {
                return Err(TonelliShanksError);
            }
        }
        iterations += 1;
        if iterations > TWO_ADICITY {
            return Err(TonelliShanksError);
        }
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }
        m = i;
        c = b.square();
        t = t.mul(&c);
        r = r.mul(&b);
    }
}

fn odd_part_and_shift(mut x: BigInt<LIMBS>) -> (BigInt<LIMBS>, u32) {
    let (x_minus_1, _) = x.sub_with_borrow(&BigInt::new([1, 0, 0, 0]));
    x = x_minus_1;
    let mut shift = 0u32;
    while x.0[0] & 1 == 0 {
        x = x.shr1();
        shift += 1;
    }
    (x, shift)
}

/// Draws a uniform `Fr` element by rejecting samples `>= r`. The BLS12-381
/// scalar field needs 255 bits, so the single top bit is always masked.
pub fn random(rng: &mut impl SecureRng) -> Fr {
    crate::fp::random_fp::<FrConfig, LIMBS>(rng, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_identity() {
        let a = Fr::from_canonical(BigInt::new([42, 0, 0, 0]));
        assert_eq!(a.mul(&Fr::ONE), a);
    }

    #[test]
    fn tonelli_shanks_recovers_square_root() {
        let a = Fr::from_canonical(BigInt::new([11, 0, 0, 0]));
        let a2 = a.square();
        let root = square_root(&a2)
            .expect("legendre-positive input must not error")
            .expect("a square must have a root");
        assert_eq!(root.square(), a2);
    }

    #[test]
    fn non_residue_has_no_root() {
        // FrConfig::NONRESIDUE is a non-residue by construction.
        let nr = Fr::from_canonical(FrConfig::NONRESIDUE);
        assert_eq!(square_root(&nr).expect("legendre check does not error"), None);
    }
}
