//! `Fq2 = Fq[u] / (u^2 + 1)`, the quadratic extension used as the base of
//! the sextic tower `Fq6`/`Fq12` and as `G2`'s coordinate field.

use crate::fq::Fq;
use crate::rng::SecureRng;

/// An element `c0 + c1*u` of `Fq2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq2 {
    /// Real part.
    pub c0: Fq,
    /// Coefficient of `u`.
    pub c1: Fq,
}

impl Fq2 {
    /// The additive identity.
    pub const ZERO: Self = Self {
        c0: Fq::ZERO,
        c1: Fq::ZERO,
    };

    /// Constructs `c0 + c1*u`.
    pub const fn new(c0: Fq, c1: Fq) -> Self {
        Self { c0, c1 }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::new(Fq::ONE, Fq::ZERO)
    }

    /// `true` if both coefficients are zero.
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

    /// `2 * self`.
    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg())
    }

    /// Complex-multiplication-style product: `(a0+a1u)(b0+b1u) = (a0b0 -
    /// a1b1) + (a0b1 + a1b0)u`, computed with the 3-multiplication Karatsuba
    /// trick (`u^2 = -1`).
    pub fn mul(&self, rhs: &Self) -> Self {
        let a0b0 = self.c0.mul(&rhs.c0);
        let a1b1 = self.c1.mul(&rhs.c1);
        let mid = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        Self::new(a0b0.sub(&a1b1), mid.sub(&a0b0).sub(&a1b1))
    }

    /// `self^2`, using the same complex-squaring identity as `mul` but with
    /// one fewer multiplication: `(a0+a1)(a0-a1) = a0^2 - a1^2`.
    pub fn square(&self) -> Self {
        let sum = self.c0.add(&self.c1);
        let diff = self.c0.sub(&self.c1);
        let c0 = sum.mul(&diff);
        let c1 = self.c0.mul(&self.c1).double();
        Self::new(c0, c1)
    }

    /// Multiplies by the sextic non-residue `u + 1` used by `Fq6 = Fq2[v] /
    /// (v^3 - (u+1))`: `(c0+c1u)(1+u) = (c0 - c1) + (c0 + c1)u`.
    pub fn multiply_by_nonresidue(&self) -> Self {
        Self::new(self.c0.sub(&self.c1), self.c0.add(&self.c1))
    }

    /// Multiplies by the `Fq` scalar `a`, broadcasting across both parts.
    pub fn mul_by_fq(&self, a: &Fq) -> Self {
        Self::new(self.c0.mul(a), self.c1.mul(a))
    }

    /// Conjugation: the Frobenius map `x -> x^q`, which on `Fq2` fixes `c0`
    /// and negates `c1` since `u^q = -u` for odd `q`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// `self^(q^i)`, used by the sextic tower's own Frobenius maps. On `Fq2`
    /// only the parity of `i` matters: even powers are the identity, odd
    /// powers are conjugation.
    pub fn frobenius_map(&self, power: usize) -> Self {
        if power % 2 == 0 {
            *self
        } else {
            self.conjugate()
        }
    }

    /// Field norm `N(a) = a * conj(a) = c0^2 + c1^2`, an element of `Fq`.
    /// Zero iff `a` is zero.
    pub fn norm(&self) -> Fq {
        self.c0.square().add(&self.c1.square())
    }

    /// Inverse via `a^-1 = conj(a) / N(a)`.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let norm_inv = self.norm().inverse();
        Self::new(self.c0.mul(&norm_inv), self.c1.neg().mul(&norm_inv))
    }

    /// Legendre symbol of `self` viewed as an element of `Fq2^*`: `self` is a
    /// square in `Fq2` iff `N(self)` is a square in `Fq`, since `Fq2^*` is
    /// cyclic of order `(p^2-1)` and the norm map is surjective onto
    /// quadratic residues.
    pub fn legendre(&self) -> i32 {
        if self.is_zero() {
            return 0;
        }
        self.norm().legendre()
    }

    /// Square root via the Scipione-del-Ferro-style reduction used for
    /// quadratic extensions of odd-characteristic fields with `p ≡ 3 (mod
    /// 4)`: for `a = a0 + a1*u` with `a1 != 0`,
    /// `alpha = sqrt(a0^2 + a1^2)`, `delta = sqrt((a0+alpha)/2)` (trying the
    /// other sign if that is not a residue), `x0 = delta`, `x1 = a1 / (2
    /// delta)`. When `a1 == 0`, falls back to the per-coordinate square
    /// root. Returns `None` if `self` is not a square; returns `Some(ZERO)`
    /// for `self == ZERO` as the documented degenerate case.
    pub fn square_root(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        if self.c1.is_zero() {
            if let Some(r0) = crate::fq::square_root(&self.c0) {
                return Some(Self::new(r0, Fq::ZERO));
            }
            // -c0 must be a residue instead: sqrt(c0) = i*sqrt(-c0), with
            // i = sqrt(-1) not available in Fq, so represent the root as
            // 0 + sqrt(-c0)*u using u^2 = -1.
            let neg = self.c0.neg();
            return crate::fq::square_root(&neg).map(|r| Self::new(Fq::ZERO, r));
        }
        let alpha = self.norm();
        let alpha_root = crate::fq::square_root(&alpha)?;
        let two_inv = Fq::from_canonical(crate::bigint::BigInt::new([2, 0, 0, 0, 0, 0])).inverse();
        let mut delta = self.c0.add(&alpha_root).mul(&two_inv);
        if delta.legendre() == -1 {
            delta = self.c0.sub(&alpha_root).mul(&two_inv);
        }
        let x0 = crate::fq::square_root(&delta)?;
        let x1 = self.c1.mul(&x0.double().inverse());
        Some(Self::new(x0, x1))
    }

    /// Draws both coefficients independently at random.
    pub fn random(rng: &mut impl SecureRng) -> Self {
        Self::new(crate::fq::random(rng), crate::fq::random(rng))
    }
}
