//! `Fq12 = Fq6[w] / (w^2 - v)`, the full extension field the pairing's
//! target group `GT` lives inside.

use crate::fq2::Fq2;
use crate::fq6::Fq6;
use crate::rng::SecureRng;

/// An element `c0 + c1*w` of `Fq12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq12 {
    /// Coefficient of `w^0`.
    pub c0: Fq6,
    /// Coefficient of `w^1`.
    pub c1: Fq6,
}

/// `xi^((q-1)/6)`, the coefficient the top-level Frobenius map multiplies
/// the `w` term by. Identical value to `Fq6`'s `v`-coefficient (since both
/// come from the same nonresidue `xi = u+1`, with `(q-1)/6` the `v`-exponent
/// halved), cross-checked directly against the reference implementation's
/// `uplusonetotheqminusoneoversix` constant.
const FROBENIUS_COEFF_C1: Fq2 = Fq2::new(
    crate::fq::Fq::from_montgomery_unchecked(crate::bigint::BigInt::new([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5dac_ce4d,
        0x08f2_220f_b0fb_66eb,
    ])),
    crate::fq::Fq::from_montgomery_unchecked(crate::bigint::BigInt::new([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ])),
);

impl Fq12 {
    /// The additive identity.
    pub const ZERO: Self = Self {
        c0: Fq6::ZERO,
        c1: Fq6::ZERO,
    };

    /// Constructs `c0 + c1*w`.
    pub const fn new(c0: Fq6, c1: Fq6) -> Self {
        Self { c0, c1 }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::new(Fq6::one(), Fq6::ZERO)
    }

    /// `true` iff both coefficients are zero.
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg())
    }

    /// Complex-multiplication-style product (`w^2 = v`).
    pub fn mul(&self, rhs: &Self) -> Self {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let c0 = v0.add(&v1.multiply_by_nonresidue());
        let c1 = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&v0)
            .sub(&v1);
        Self::new(c0, c1)
    }

    /// `self^2`, using the quadratic-extension squaring identity.
    pub fn square(&self) -> Self {
        let sum = self.c0.add(&self.c1);
        let diff = self.c0.sub(&self.c1.multiply_by_nonresidue());
        let prod = self.c0.mul(&self.c1);
        let c0 = sum.mul(&diff).add(&prod.multiply_by_nonresidue()).add(&prod);
        let c1 = prod.add(&prod);
        Self::new(c0, c1)
    }

    /// Inverse via the quadratic-extension identity `a^-1 = conj(a) /
    /// N(a)`, `N(a) = c0^2 - v*c1^2`.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let norm = self.c0.square().sub(&self.c1.square().multiply_by_nonresidue());
        let norm_inv = norm.inverse();
        Self::new(self.c0.mul(&norm_inv), self.c1.neg().mul(&norm_inv))
    }

    /// Conjugation, i.e. `self^(q^6)`: fixes `c0`, negates `c1`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// `self^(q^i)`. Applies the single-step Frobenius `power` times,
    /// mirroring the reference implementation's repeated-multiply approach
    /// rather than a precomputed 12-entry table.
    pub fn frobenius_map(&self, power: usize) -> Self {
        let mut result = *self;
        for _ in 0..(power % 12) {
            result = result.frobenius_once();
        }
        result
    }

    fn frobenius_once(&self) -> Self {
        let c0 = self.c0.frobenius_map(1);
        let c1 = self.c1.frobenius_map(1).mul_by_fq2(&FROBENIUS_COEFF_C1);
        Self::new(c0, c1)
    }

    /// Sparse multiplication used by the Miller loop's line-function
    /// accumulation: `rhs` has the shape `c0 + (c1, 0, c1_2)*w` i.e. only
    /// `c0` and the `v^0`/`v^1` slots of `c1` are populated (`c014` naming
    /// follows the reference pairing code's line-coefficient layout).
    pub fn multiply_by_c014(&self, c0: &Fq2, c1: &Fq2, c4: &Fq2) -> Self {
        let t0 = self.c0.multiply_by_c01(c0, c1);
        let t1 = self.c1.mul_by_fq2(c4);
        let o = c1.add(c4);
        let t2 = self.c0.add(&self.c1).multiply_by_c01(c0, &o);
        let new_c1 = t2.sub(&t0).sub(&t1);
        let new_c0 = t0.add(&t1.multiply_by_nonresidue());
        Self::new(new_c0, new_c1)
    }

    /// Exponentiation by a public, non-secret exponent (the easy part of
    /// final exponentiation and `PowersOfX`-style GT scalar multiplication
    /// both use this; neither needs constant-time behavior since the
    /// exponent there is a fixed public constant, not a secret scalar).
    pub fn pow(&self, exp: &[u64]) -> Self {
        let mut result = Self::one();
        for &word in exp.iter().rev() {
            for i in (0..64).rev() {
                result = result.square();
                if (word >> i) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Squaring specialized to elements known to lie in the order-`r`
    /// cyclotomic subgroup (Granger-Scott): roughly 2x cheaper than a
    /// generic `Fq12` squaring because the subgroup constraint `a *
    /// conj(a) = 1` lets two of `Fq6`'s three `Fq2` coefficients be
    /// recovered from the others rather than recomputed from scratch.
    pub fn cyclotomic_square(&self) -> Self {
        let z0 = self.c0.c0;
        let z4 = self.c0.c1;
        let z3 = self.c0.c2;
        let z2 = self.c1.c0;
        let z1 = self.c1.c1;
        let z5 = self.c1.c2;

        let (t0, t1) = fq2_square_chain(&z0, &z1);
        let z0 = t0.sub(&z0).double().add(&t0);
        let z1 = t1.add(&z1).double().add(&t1);

        let (t0, t1) = fq2_square_chain(&z2, &z3);
        let t1n = t1.multiply_by_nonresidue();
        let z2 = t1n.add(&z2).double().add(&t1n);
        let z3 = t0.sub(&z3).double().add(&t0);

        let (t0, t1) = fq2_square_chain(&z4, &z5);
        let t1n = t1.multiply_by_nonresidue();
        let z4 = t1n.add(&z4).double().add(&t1n);
        let z5 = t0.sub(&z5).double().add(&t0);

        Self::new(Fq6::new(z0, z4, z3), Fq6::new(z2, z1, z5))
    }

    /// Draws both coefficients independently at random.
    pub fn random(rng: &mut impl SecureRng) -> Self {
        Self::new(Fq6::random(rng), Fq6::random(rng))
    }
}

/// Shared `(a+b)(a-b), 2ab`-style chain used by each of `cyclotomic_square`'s
/// three independent `Fq2` sub-squarings.
fn fq2_square_chain(a: &Fq2, b: &Fq2) -> (Fq2, Fq2) {
    let ab = a.mul(b);
    let sum = a.add(b);
    let t0 = a.add(&b.multiply_by_nonresidue()).mul(&sum).sub(&ab).sub(&ab.multiply_by_nonresidue());
    let t1 = ab.double();
    (t0, t1)
}
