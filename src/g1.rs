//! `G1`: the prime-order subgroup of the curve `y^2 = x^3 + 4` over `Fq`.

use crate::bigint::BigInt;
use crate::curve::{Affine as GenericAffine, CurveConfig, CurveField, Projective as GenericProjective};
use crate::fp::MontConfig;
use crate::fq::{self, Fq};
use crate::fr::Fr;
use crate::rng::SecureRng;

impl CurveField for Fq {
    const ZERO: Self = Fq::ZERO;
    fn one() -> Self {
        Fq::ONE
    }
    fn is_zero(&self) -> bool {
        Fq::is_zero(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        Fq::add(self, rhs)
    }
    fn sub(&self, rhs: &Self) -> Self {
        Fq::sub(self, rhs)
    }
    fn double(&self) -> Self {
        Fq::double(self)
    }
    fn neg(&self) -> Self {
        Fq::neg(self)
    }
    fn mul(&self, rhs: &Self) -> Self {
        Fq::mul(self, rhs)
    }
    fn square(&self) -> Self {
        Fq::square(self)
    }
    fn inverse(&self) -> Self {
        Fq::inverse(self)
    }
    fn square_root(&self) -> Option<Self> {
        fq::square_root(self)
    }
    fn legendre(&self) -> i32 {
        Fq::legendre(self)
    }
    fn random(rng: &mut impl SecureRng) -> Self {
        fq::random(rng)
    }
    fn lexicographically_largest(&self) -> bool {
        let canonical = self.into_canonical();
        let p_minus_1 = fq::FqConfig::MODULUS.sub_with_borrow(&BigInt::new([1, 0, 0, 0, 0, 0])).0;
        let half = p_minus_1.shr1();
        canonical.cmp(&half) == core::cmp::Ordering::Greater
    }
}

/// `G1`'s curve configuration.
#[derive(Clone, Copy)]
pub struct G1Config;

/// `b = 4` in Montgomery form, lifted directly from the reference
/// implementation's `g1_b_coeff`.
const B: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]));

const GENERATOR_X: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0x5cb3_8790_fd53_0c16,
    0x7817_fc67_9976_fff5,
    0x154f_95c7_143b_a1c1,
    0xf0ae_6acd_f3d0_e747,
    0xedce_6ecc_21db_f440,
    0x1201_7741_9e0b_fb75,
]));
const GENERATOR_Y: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0xbaac_93d5_0ce7_2271,
    0x8c22_631a_7918_fd8e,
    0xdd59_5f13_5707_25ce,
    0x51ac_5829_5040_5194,
    0x0e1c_8c3f_ad00_59c0,
    0x0bbc_3efc_5008_a26a,
]));

/// The G1 cofactor, `h1 = (x-1)^2 / 3`, 128 bits.
pub const COFACTOR: [u64; 2] = [0x8c00_aaab_0000_aaab, 0x396c_8c00_5555_e156];

/// GLV endomorphism constant `beta`, a primitive cube root of unity in `Fq`
/// with `beta * x = x` unchanged and `(beta*x, y)` a valid curve point
/// whenever `(x, y)` is.
const ENDOMORPHISM_BETA: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0x30f1_361b_798a_64e8,
    0xf3b8_ddab_7ece_5a2a,
    0x16a8_ca3a_c615_77f7,
    0xc26a_2ff8_74fd_029b,
    0x3636_b766_6070_1c6e,
    0x051b_a4ab_241b_6160,
]));

/// Exposes [`B`] to `g2.rs`, which embeds the same constant (doubled into
/// both `Fq2` coefficients) as the twist's `b'` coefficient.
pub(crate) const fn b_coeff() -> Fq {
    B
}

impl CurveConfig for G1Config {
    type Field = Fq;
    const B: Fq = B;
    fn generator() -> GenericAffine<Self> {
        GenericAffine::new_unchecked(GENERATOR_X, GENERATOR_Y)
    }
}

/// An affine `G1` point.
pub type Affine = GenericAffine<G1Config>;
/// A Jacobian-projective `G1` point.
pub type Projective = GenericProjective<G1Config>;

/// `lambda`, the `Fr`-scalar cube root of unity paired with `ENDOMORPHISM_BETA`:
/// `phi(x, y) = (beta*x, y)` acts as multiplication by `lambda` on the
/// prime-order subgroup.
fn endomorphism_lambda() -> Fr {
    Fr::from_canonical(BigInt::new([
        0xffff_fffe_0000_0001,
        0xa778_0001_fffc_b7fc,
        0x3339_d808_09a1_d804,
        0x73ed_a753_299d_7d48,
    ]))
}

/// `v1_2`, `v2_1`: the non-trivial entries of the reduced GLV lattice basis
/// `v1 = (1, -v1_2)`, `v2 = (v2_1, 1)`, both 128-bit, lifted directly from
/// the reference implementation's `curve_fast_multiply.cpp`.
const V1_2: [u64; 2] = [0x0000_0000_ffff_ffff, 0xac45_a401_0001_a402];
const V2_1: [u64; 2] = [0x0000_0001_0000_0000, 0xac45_a401_0001_a402];

/// Applies the `phi(x,y) = (beta*x, y)` endomorphism to an affine point.
pub fn endomorphism(p: &Affine) -> Affine {
    if p.infinity {
        return *p;
    }
    Affine::new_unchecked(p.x.mul(&ENDOMORPHISM_BETA), p.y)
}

/// Splits a scalar `k` into `(k1, k2)` with `k = k1 + k2*lambda (mod r)` and
/// both halves roughly half the bit length of `k`, using the reduced basis
/// `v1`, `v2`. Rounding uses ordinary `BigInt` division rather than the
/// reference implementation's Granlund-reciprocal shortcut (see DESIGN.md).
pub fn decompose_scalar(k: &Fr) -> (Fr, bool, Fr, bool) {
    let k_big = k.into_canonical();
    let r = crate::fr::FrConfig::MODULUS;
    let v1_2 = BigInt::<4>::new([V1_2[0], V1_2[1], 0, 0]);
    let v2_1 = BigInt::<4>::new([V2_1[0], V2_1[1], 0, 0]);
    let r_wide = widen(&r);

    let c1 = round_div(&mul_bigint(&k_big, &v2_1), &r_wide);
    let c2 = round_div(&mul_bigint(&k_big, &v1_2), &r_wide);

    // k1 = k - c1*1 - c2*v2_1 ; k2 = c1*v1_2 - c2*1
    let c1_v2_1 = narrow(&mul_bigint(&c1, &v2_1).divmod(&r_wide).1);
    let (k1_unsigned, k1_neg) = sub_signed(&k_big, &c1);
    let (k1_unsigned, k1_neg) = sub_signed_track(k1_unsigned, k1_neg, c1_v2_1, false);

    let c1_v1_2 = narrow(&mul_bigint(&c1, &v1_2).divmod(&r_wide).1);
    let (k2_unsigned, k2_neg) = sub_signed(&c1_v1_2, &c2);

    (
        Fr::from_canonical(k1_unsigned),
        k1_neg,
        Fr::from_canonical(k2_unsigned),
        k2_neg,
    )
}

fn mul_bigint(a: &BigInt<4>, b: &BigInt<4>) -> BigInt<8> {
    BigInt::new(a.mul_wide::<8>(b))
}

fn widen(x: &BigInt<4>) -> BigInt<8> {
    BigInt::new([x.0[0], x.0[1], x.0[2], x.0[3], 0, 0, 0, 0])
}

fn narrow(x: &BigInt<8>) -> BigInt<4> {
    BigInt::new([x.0[0], x.0[1], x.0[2], x.0[3]])
}

/// Divides the wide product by `modulus`, rounding to the nearest integer
/// (round-half-up), then truncates back to 4 limbs: the GLV rounding
/// coefficients are always small enough to fit.
fn round_div(numerator: &BigInt<8>, modulus: &BigInt<8>) -> BigInt<4> {
    let (quotient, remainder) = numerator.divmod(modulus);
    let (double_rem, carry) = remainder.add_with_carry(&remainder);
    let rounded = if carry || double_rem.cmp(modulus) != core::cmp::Ordering::Less {
        quotient.add_with_carry(&BigInt::new([1, 0, 0, 0, 0, 0, 0, 0])).0
    } else {
        quotient
    };
    narrow(&rounded)
}

fn sub_signed(a: &BigInt<4>, b: &BigInt<4>) -> (BigInt<4>, bool) {
    let (diff, borrow) = a.sub_with_borrow(b);
    if borrow {
        (b.sub_with_borrow(a).0, true)
    } else {
        (diff, false)
    }
}

fn sub_signed_track(a: BigInt<4>, a_neg: bool, b: BigInt<4>, b_neg: bool) -> (BigInt<4>, bool) {
    match (a_neg, b_neg) {
        (false, false) => sub_signed(&a, &b),
        (true, true) => {
            let (r, neg) = sub_signed(&b, &a);
            (r, !neg)
        }
        (false, true) => (a.add_with_carry(&b).0, false),
        (true, false) => {
            let (sum, _) = a.add_with_carry(&b);
            (sum, true)
        }
    }
}

/// GLV scalar multiplication: decomposes `k` into two half-size scalars and
/// performs two interleaved w-NAF multiplications, one of them against the
/// endomorphism image of `p`.
pub fn multiply_glv(p: &Affine, k: &Fr) -> Projective {
    let (k1, k1_neg, k2, k2_neg) = decompose_scalar(k);
    let p1 = if k1_neg { p.neg() } else { *p };
    let phi_p = endomorphism(p);
    let p2 = if k2_neg { phi_p.neg() } else { phi_p };

    let bits1 = crate::wnaf::naf_bits(&k1.into_canonical());
    let bits2 = crate::wnaf::naf_bits(&k2.into_canonical());
    let len = bits1.len().max(bits2.len());

    let mut result = Projective::infinity();
    for i in (0..len).rev() {
        result = result.double();
        let d1 = bits1.get(i).copied().unwrap_or(0);
        let d2 = bits2.get(i).copied().unwrap_or(0);
        if d1 == 1 {
            result = result.add_mixed(&p1);
        } else if d1 == -1 {
            result = result.add_mixed(&p1.neg());
        }
        if d2 == 1 {
            result = result.add_mixed(&p2);
        } else if d2 == -1 {
            result = result.add_mixed(&p2.neg());
        }
    }
    result
}

/// Clears the cofactor: multiplies by `h1` so the result lies in the
/// prime-order subgroup.
pub fn clear_cofactor(p: &Projective) -> Projective {
    let cofactor = BigInt::<2>::new(COFACTOR);
    let bits = (0..128).rev().map(|i| cofactor.bit(i));
    p.multiply_bits(bits)
}

/// Hash-to-curve via "try and increment": repeatedly hashes `(message,
/// counter)` into an `Fq` candidate `x` until `x^3 + b` is a square,
/// matching the reference implementation's documented approach (eprint
/// 2009/226) rather than a constant-time SWU map.
pub fn try_and_increment(message: &[u8]) -> Affine {
    let mut counter: u64 = 0;
    loop {
        let counter_bytes = counter.to_be_bytes();
        let (x, greater) = fq::hash_reduce(&[message, &counter_bytes]);
        if let Some(p) = Affine::get_point_from_x(x, greater) {
            return p;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        assert!(G1Config::generator().is_on_curve());
    }

    #[test]
    fn double_and_add_agree() {
        let g = Projective::from_affine(&G1Config::generator());
        let doubled = g.double();
        let added = g.add(&g);
        assert_eq!(doubled, added);
    }

    #[test]
    fn endomorphism_preserves_curve_membership() {
        let g = G1Config::generator();
        let phi_g = endomorphism(&g);
        assert!(phi_g.is_on_curve());
    }
}
