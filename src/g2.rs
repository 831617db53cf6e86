//! `G2`: the prime-order subgroup of the sextic twist, over `Fq2`.

use crate::bigint::BigInt;
use crate::curve::{Affine as GenericAffine, CurveConfig, CurveField, Projective as GenericProjective};
use crate::fq::Fq;
use crate::fq2::Fq2;
use crate::fr::Fr;
use crate::rng::SecureRng;

impl CurveField for Fq2 {
    const ZERO: Self = Fq2::ZERO;
    fn one() -> Self {
        Fq2::one()
    }
    fn is_zero(&self) -> bool {
        Fq2::is_zero(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        Fq2::add(self, rhs)
    }
    fn sub(&self, rhs: &Self) -> Self {
        Fq2::sub(self, rhs)
    }
    fn double(&self) -> Self {
        Fq2::double(self)
    }
    fn neg(&self) -> Self {
        Fq2::neg(self)
    }
    fn mul(&self, rhs: &Self) -> Self {
        Fq2::mul(self, rhs)
    }
    fn square(&self) -> Self {
        Fq2::square(self)
    }
    fn inverse(&self) -> Self {
        Fq2::inverse(self)
    }
    fn square_root(&self) -> Option<Self> {
        Fq2::square_root(self)
    }
    fn legendre(&self) -> i32 {
        Fq2::legendre(self)
    }
    fn random(rng: &mut impl SecureRng) -> Self {
        Fq2::random(rng)
    }
    fn lexicographically_largest(&self) -> bool {
        // Standard convention for quadratic extensions: compare the higher
        // coefficient first, falling back to the lower one when it is zero.
        if self.c1.is_zero() {
            self.c0.lexicographically_largest()
        } else {
            self.c1.lexicographically_largest()
        }
    }
}

/// `G2`'s curve configuration.
#[derive(Clone, Copy)]
pub struct G2Config;

/// `b' = (4, 4)` (i.e. `4*(1+u)`), the twisted Weierstrass constant, lifted
/// from the reference implementation's `g2_b_coeff = Fq2{g1_b_coeff,
/// g1_b_coeff}`.
const B: Fq2 = Fq2::new(crate::g1::b_coeff(), crate::g1::b_coeff());

const GEN_X_C0: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0xf5f2_8fa2_0294_0a10,
    0xb3f5_fb26_87b4_961a,
    0xa1a8_93b5_3e2a_e580,
    0x9894_999d_1a3c_aee9,
    0x6f67_b763_1863_366b,
    0x0581_9192_4350_bcd7,
]));
const GEN_X_C1: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0xa5a9_c075_9e23_f606,
    0xaaa0_c59d_bccd_60c3,
    0x3bb1_7e18_e286_7806,
    0x1b1a_b6cc_8541_b367,
    0xc2b6_ed0e_f215_8547,
    0x1192_2a09_7360_edf3,
]));
const GEN_Y_C0: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0x4c73_0af8_6049_4c4a,
    0x597c_fa1f_5e36_9c5a,
    0xe7e6_856c_aa0a_635a,
    0xbbef_b5e9_6e0d_495f,
    0x07d3_a975_f0ef_25a2,
    0x0083_fd8e_7e80_dae5,
]));
const GEN_Y_C1: Fq = Fq::from_montgomery_unchecked(BigInt::new([
    0xadc0_fc92_df64_b05d,
    0x18aa_270a_2b14_61dc,
    0x86ad_ac6a_3be4_eba0,
    0x7949_5c4e_c93d_a33a,
    0xe717_5850_a43c_caed,
    0x0b2b_c2a1_63de_1bf2,
]));

/// The G2 cofactor, 512 bits.
pub const COFACTOR: [u64; 8] = [
    0xcf1c_38e3_1c72_38e5,
    0x1616_ec6e_786f_0c70,
    0x2153_7e29_3a66_91ae,
    0xa628_f1cb_4d9e_82ef,
    0xa68a_205b_2e5a_7ddf,
    0xcd91_de45_4708_5aba,
    0x091d_5079_2876_a202,
    0x05d5_43a9_5414_e7f1,
];

impl CurveConfig for G2Config {
    type Field = Fq2;
    const B: Fq2 = B;
    fn generator() -> GenericAffine<Self> {
        GenericAffine::new_unchecked(
            Fq2::new(GEN_X_C0, GEN_X_C1),
            Fq2::new(GEN_Y_C0, GEN_Y_C1),
        )
    }
}

/// An affine `G2` point.
pub type Affine = GenericAffine<G2Config>;
/// A Jacobian-projective `G2` point.
pub type Projective = GenericProjective<G2Config>;

/// `(1+u)^((q-1)/6)`, the GLS/untwist-Frobenius-twist coefficient, lifted
/// directly from the reference implementation's
/// `uplusonetotheqminusoneoversix`.
const PSI_COEFF: Fq2 = Fq2::new(
    Fq::from_montgomery_unchecked(BigInt::new([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5dac_ce4d,
        0x08f2_220f_b0fb_66eb,
    ])),
    Fq::from_montgomery_unchecked(BigInt::new([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ])),
);

/// Applies the untwist-Frobenius-twist endomorphism `psi` once: `psi(x,y) =
/// (conj(x) * coeff^2, conj(y) * coeff^3)`. On the prime-order subgroup this
/// acts as scalar multiplication by the BLS curve parameter `x` (the GLS
/// analogue of `G1`'s `phi`).
pub fn psi(p: &Affine) -> Affine {
    if p.infinity {
        return *p;
    }
    let coeff2 = PSI_COEFF.square();
    let coeff3 = coeff2.mul(&PSI_COEFF);
    Affine::new_unchecked(
        p.x.conjugate().mul(&coeff2),
        p.y.conjugate().mul(&coeff3),
    )
}

/// Applies `psi` `power` times.
pub fn psi_iter(p: &Affine, power: u32) -> Affine {
    let mut result = *p;
    for _ in 0..power {
        result = psi(&result);
    }
    result
}

/// The BLS12-381 curve parameter's absolute value, `|x| =
/// 0xd201000000010000`; `x` itself is negative.
pub const X_ABS: u64 = 0xd201_0000_0001_0000;

/// Decomposes `k`'s canonical integer into four digits `c0..c3`, each `<
/// X_ABS`, such that (up to the sign of `x`, handled by the caller via
/// `psi`'s eigenvalue already encoding it mod `r`) `k = c0 + c1*x + c2*x^2 +
/// c3*x^3`. Mirrors the reference implementation's `PowersOfX::decompose`.
pub fn decompose_by_x(k: &BigInt<4>) -> [u64; 4] {
    let (q0, c0) = k.divide_word::<X_ABS>();
    let (q1, c1) = q0.divide_word::<X_ABS>();
    let (q2, c2) = q1.divide_word::<X_ABS>();
    let c3 = q2.0[0];
    [c0, c1, c2, c3]
}

/// GLS scalar multiplication: decomposes `k` via [`decompose_by_x`] and sums
/// the four `psi`-images of `p`, each scaled by its digit.
pub fn multiply_gls(p: &Affine, k: &Fr) -> Projective {
    let digits = decompose_by_x(&k.into_canonical());
    let mut acc = Projective::infinity();
    for i in 0..4 {
        let base = if i == 0 { *p } else { psi_iter(p, i as u32) };
        acc = acc.add(&multiply_small(&base, digits[i]));
    }
    acc
}

fn multiply_small(base: &Affine, scalar: u64) -> Projective {
    let mut result = Projective::infinity();
    for i in (0..64).rev() {
        result = result.double();
        if (scalar >> i) & 1 == 1 {
            result = result.add_mixed(base);
        }
    }
    result
}

/// Clears the cofactor: multiplies by `h2` so the result lies in the
/// prime-order subgroup.
pub fn clear_cofactor(p: &Projective) -> Projective {
    let cofactor = BigInt::<8>::new(COFACTOR);
    let bits = (0..512).rev().map(|i| cofactor.bit(i));
    p.multiply_bits(bits)
}

/// Hash-to-curve via "try and increment", the `G2` analogue of
/// [`crate::g1::try_and_increment`]: repeatedly hashes `(message, counter)`
/// into an `Fq2` candidate `x` (hashing each coefficient under its own
/// domain tag) until `x^3 + b'` is a square.
pub fn try_and_increment(message: &[u8]) -> Affine {
    let mut counter: u64 = 0;
    loop {
        let counter_bytes = counter.to_be_bytes();
        let (c0, _) = crate::fq::hash_reduce(&[b"g2-c0", message, &counter_bytes]);
        let (c1, greater) = crate::fq::hash_reduce(&[b"g2-c1", message, &counter_bytes]);
        let x = Fq2::new(c0, c1);
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
        assert!(G2Config::generator().is_on_curve());
    }

    #[test]
    fn double_and_add_agree() {
        let g = Projective::from_affine(&G2Config::generator());
        assert_eq!(g.double(), g.add(&g));
    }

    #[test]
    fn psi_preserves_curve_membership() {
        let g = G2Config::generator();
        assert!(psi(&g).is_on_curve());
    }
}
