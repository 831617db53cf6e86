//! `Fq6 = Fq2[v] / (v^3 - xi)`, `xi = u + 1`, the cubic extension sitting
//! under `Fq12` in the sextic tower.

use crate::fq2::Fq2;
use crate::rng::SecureRng;

/// An element `c0 + c1*v + c2*v^2` of `Fq6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq6 {
    /// Coefficient of `v^0`.
    pub c0: Fq2,
    /// Coefficient of `v^1`.
    pub c1: Fq2,
    /// Coefficient of `v^2`.
    pub c2: Fq2,
}

/// `xi^((q-1)/3)`, the coefficient the Frobenius map multiplies the `v`
/// term by. Higher Frobenius powers are obtained by repeated application
/// rather than a precomputed table, mirroring the reference
/// implementation's `fq2_multiply_frobenius` loop.
const FROBENIUS_COEFF_C1: Fq2 = Fq2::new(
    crate::fq::Fq::from_montgomery_unchecked(crate::bigint::BigInt::new([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ])),
    crate::fq::Fq::ZERO,
);

impl Fq6 {
    /// The additive identity.
    pub const ZERO: Self = Self {
        c0: Fq2::ZERO,
        c1: Fq2::ZERO,
        c2: Fq2::ZERO,
    };

    /// Constructs `c0 + c1*v + c2*v^2`.
    pub const fn new(c0: Fq2, c1: Fq2, c2: Fq2) -> Self {
        Self { c0, c1, c2 }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::new(Fq2::one(), Fq2::ZERO, Fq2::ZERO)
    }

    /// `true` iff all three coefficients are zero.
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(
            self.c0.add(&rhs.c0),
            self.c1.add(&rhs.c1),
            self.c2.add(&rhs.c2),
        )
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(
            self.c0.sub(&rhs.c0),
            self.c1.sub(&rhs.c1),
            self.c2.sub(&rhs.c2),
        )
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }

    /// Multiplies by `v`: `(c0+c1v+c2v^2)*v = c2*xi + c0*v + c1*v^2`.
    pub fn multiply_by_nonresidue(&self) -> Self {
        Self::new(
            self.c2.multiply_by_nonresidue(),
            self.c0,
            self.c1,
        )
    }

    /// Cubic-extension (Devegili-OhEigeartaigh-Scott-Dahab) Karatsuba
    /// multiplication: 5 `Fq2` multiplications instead of the schoolbook 9.
    pub fn mul(&self, rhs: &Self) -> Self {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let v2 = self.c2.mul(&rhs.c2);

        let c0 = v0.add(
            &self
                .c1
                .add(&self.c2)
                .mul(&rhs.c1.add(&rhs.c2))
                .sub(&v1)
                .sub(&v2)
                .multiply_by_nonresidue(),
        );
        let c1 = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&v0)
            .sub(&v1)
            .add(&v2.multiply_by_nonresidue());
        let c2 = self
            .c0
            .add(&self.c2)
            .mul(&rhs.c0.add(&rhs.c2))
            .sub(&v0)
            .add(&v1)
            .sub(&v2);
        Self::new(c0, c1, c2)
    }

    /// Chung-Hasan SQR3 cubic-extension squaring.
    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0.mul(&self.c1);
        let s1 = ab.double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let bc = self.c1.mul(&self.c2);
        let s3 = bc.double();
        let s4 = self.c2.square();

        let c0 = s0.add(&s3.multiply_by_nonresidue());
        let c1 = s1.add(&s4.multiply_by_nonresidue());
        let c2 = s1.add(&s2).add(&s3).sub(&s0).sub(&s4);
        Self::new(c0, c1, c2)
    }

    /// Sparse multiplication by an element with only `c0`/`c1` nonzero
    /// (`c2 = 0`), the shape the Miller loop's line function produces.
    pub fn multiply_by_c01(&self, c0: &Fq2, c1: &Fq2) -> Self {
        let v0 = self.c0.mul(c0);
        let v1 = self.c1.mul(c1);

        let a1a2 = self.c1.add(&self.c2);
        let t0 = c1.mul(&a1a2).sub(&v1).multiply_by_nonresidue();
        let new_c0 = v0.add(&t0);

        let a0a1 = self.c0.add(&self.c1);
        let new_c1 = c0.add(c1).mul(&a0a1).sub(&v0).sub(&v1);

        let a0a2 = self.c0.add(&self.c2);
        let new_c2 = c0.mul(&a0a2).sub(&v0).add(&v1);

        Self::new(new_c0, new_c1, new_c2)
    }

    /// Multiplies by the `Fq2` scalar, broadcasting across all three
    /// coefficients.
    pub fn mul_by_fq2(&self, a: &Fq2) -> Self {
        Self::new(self.c0.mul(a), self.c1.mul(a), self.c2.mul(a))
    }

    /// `self^(q^i)`. Applies the single-step Frobenius `power` times; see
    /// [`FROBENIUS_COEFF_C1`].
    pub fn frobenius_map(&self, power: usize) -> Self {
        let mut result = *self;
        for _ in 0..(power % 6) {
            result = result.frobenius_once();
        }
        result
    }

    fn frobenius_once(&self) -> Self {
        let c0 = self.c0.frobenius_map(1);
        let c1 = self.c1.frobenius_map(1).mul(&FROBENIUS_COEFF_C1);
        let c2 = self
            .c2
            .frobenius_map(1)
            .mul(&FROBENIUS_COEFF_C1.square());
        Self::new(c0, c1, c2)
    }

    /// Inverse via the cubic-extension norm/adjugate identity: for `a = a0 +
    /// a1 v + a2 v^2`, compute `t0 = a0^2 - xi*a1*a2`, `t1 = xi*a2^2 -
    /// a0*a1`, `t2 = a1^2 - a0*a2`, then `N = a0*t0 + xi*(a2*t1 + a1*t2)`
    /// and `a^-1 = N^-1 * (t0, t1, t2)`.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let t0 = self.c0.square().sub(&self.c1.mul(&self.c2).multiply_by_nonresidue());
        let t1 = self.c2.square().multiply_by_nonresidue().sub(&self.c0.mul(&self.c1));
        let t2 = self.c1.square().sub(&self.c0.mul(&self.c2));
        let norm = self
            .c0
            .mul(&t0)
            .add(&self.c2.mul(&t1).add(&self.c1.mul(&t2)).multiply_by_nonresidue());
        let norm_inv = norm.inverse();
        Self::new(t0.mul(&norm_inv), t1.mul(&norm_inv), t2.mul(&norm_inv))
    }

    /// Draws all three coefficients independently at random.
    pub fn random(rng: &mut impl SecureRng) -> Self {
        Self::new(Fq2::random(rng), Fq2::random(rng), Fq2::random(rng))
    }
}
