//! Generic short-Weierstrass curve arithmetic (`y^2 = x^3 + b`), shared by
//! `G1` (over `Fq`) and `G2` (over `Fq2`).
//!
//! Mirrors the reference implementation's `Affine<BaseField,...>` /
//! `Projective<BaseField>` templates: Jacobian projective coordinates,
//! add-1998-cmo-style general addition, add-2007-bl-style mixed addition,
//! dbl-2009-l-style doubling.

use crate::rng::SecureRng;

/// Field-agnostic operations a curve's base field must provide. Implemented
/// by both `Fq` (for `G1`) and `Fq2` (for `G2`) via thin wrappers in
/// `g1.rs`/`g2.rs`.
pub trait CurveField: Copy + Clone + PartialEq + Eq + core::fmt::Debug {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn double(&self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn square(&self) -> Self;
    fn inverse(&self) -> Self;
    fn square_root(&self) -> Option<Self>;
    fn legendre(&self) -> i32;
    fn random(rng: &mut impl SecureRng) -> Self;
    /// `true` iff this element's canonical integer representation is
    /// strictly greater than its negation's — the "greater-y" predicate the
    /// compressed encoding's flag bit and `get_point_from_x` both use to
    /// pick a canonical root deterministically.
    fn lexicographically_largest(&self) -> bool;
}

/// Per-curve constants: the Weierstrass `b` coefficient and a fixed
/// generator, both over `Self::Field`.
pub trait CurveConfig: Copy + Clone {
    /// The coordinate field (`Fq` for `G1`, `Fq2` for `G2`).
    type Field: CurveField;
    /// The Weierstrass equation's constant term.
    const B: Self::Field;
    /// A fixed generator of the whole curve group (before cofactor
    /// clearing); concrete instantiations expose the prime-order subgroup
    /// generator separately.
    fn generator() -> Affine<Self>;
}

/// An affine point `(x, y)`, or the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct Affine<C: CurveConfig> {
    /// `x` coordinate; `0` when `infinity` is set.
    pub x: C::Field,
    /// `y` coordinate; `0` when `infinity` is set.
    pub y: C::Field,
    /// `true` for the point at infinity.
    pub infinity: bool,
}

impl<C: CurveConfig> PartialEq for Affine<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            self.infinity == other.infinity
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl<C: CurveConfig> Eq for Affine<C> {}

impl<C: CurveConfig> Affine<C> {
    /// The point at infinity.
    pub fn infinity() -> Self {
        Self {
            x: C::Field::ZERO,
            y: C::Field::ZERO,
            infinity: true,
        }
    }

    /// Builds a finite point without checking the curve equation.
    pub fn new_unchecked(x: C::Field, y: C::Field) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// `y^2 == x^3 + b`.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let lhs = self.y.square();
        let rhs = self.x.square().mul(&self.x).add(&C::B);
        lhs == rhs
    }

    /// Recovers the point with the given `x` and the requested parity of
    /// `y` (`greater` selects whichever of the two roots compares greater,
    /// matching the encoding's "greater-y" flag), or `None` if `x` is not on
    /// the curve.
    pub fn get_point_from_x(x: C::Field, greater: bool) -> Option<Self> {
        let rhs = x.square().mul(&x).add(&C::B);
        let y = rhs.square_root()?;
        let neg_y = y.neg();
        let chosen = if y.lexicographically_largest() == greater {
            y
        } else {
            neg_y
        };
        Some(Self::new_unchecked(x, chosen))
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        if self.infinity {
            *self
        } else {
            Self::new_unchecked(self.x, self.y.neg())
        }
    }
}

/// A point in Jacobian projective coordinates: `(x:y:z)` represents the
/// affine point `(x/z^2, y/z^3)`.
#[derive(Clone, Copy, Debug)]
pub struct Projective<C: CurveConfig> {
    /// Jacobian `X`.
    pub x: C::Field,
    /// Jacobian `Y`.
    pub y: C::Field,
    /// Jacobian `Z`.
    pub z: C::Field,
}

impl<C: CurveConfig> Projective<C> {
    /// The point at infinity (`z = 0`).
    pub fn infinity() -> Self {
        Self {
            x: C::Field::ZERO,
            y: C::Field::one(),
            z: C::Field::ZERO,
        }
    }

    /// `true` iff this is the point at infinity.
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Lifts an affine point.
    pub fn from_affine(p: &Affine<C>) -> Self {
        if p.infinity {
            Self::infinity()
        } else {
            Self {
                x: p.x,
                y: p.y,
                z: C::Field::one(),
            }
        }
    }

    /// Projects back down to affine, normalizing by `z`.
    pub fn to_affine(&self) -> Affine<C> {
        if self.is_zero() {
            return Affine::infinity();
        }
        if cfg!(not(feature = "side-channel-resistance")) && self.z == C::Field::one() {
            return Affine::new_unchecked(self.x, self.y);
        }
        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        Affine::new_unchecked(self.x.mul(&z_inv2), self.y.mul(&z_inv3))
    }

    /// dbl-2009-l-style doubling.
    pub fn double(&self) -> Self {
        if self.is_zero() || self.y.is_zero() {
            return Self::infinity();
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let x1b = self.x.add(&b);
        let d = x1b.square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();
        let x3 = f.sub(&d.double());
        let c8 = c.double().double().double();
        let y3 = e.mul(&d.sub(&x3)).sub(&c8);
        let z3 = self.y.mul(&self.z).double();
        Self { x: x3, y: y3, z: z3 }
    }

    /// add-1998-cmo-style general (both operands projective) addition, with
    /// an explicit fallback to doubling when the operands coincide.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return *rhs;
        }
        if rhs.is_zero() {
            return *self;
        }
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = rhs.x.mul(&z1z1);
        let s1 = self.y.mul(&rhs.z).mul(&z2z2);
        let s2 = rhs.y.mul(&self.z).mul(&z1z1);

        if u1 == u2 {
            if s1 != s2 {
                return Self::infinity();
            }
            return self.double();
        }

        let h = u2.sub(&u1);
        let i = h.double().square();
        let j = h.mul(&i);
        let r = s2.sub(&s1).double();
        let v = u1.mul(&i);
        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        let z3 = self.z.add(&rhs.z).square().sub(&z1z1).sub(&z2z2).mul(&h);
        Self { x: x3, y: y3, z: z3 }
    }

    /// add-2007-bl-style mixed addition (`rhs` affine).
    pub fn add_mixed(&self, rhs: &Affine<C>) -> Self {
        if rhs.infinity {
            return *self;
        }
        if self.is_zero() {
            return Self::from_affine(rhs);
        }
        let z1z1 = self.z.square();
        let u2 = rhs.x.mul(&z1z1);
        let s2 = rhs.y.mul(&self.z).mul(&z1z1);

        if self.x == u2 {
            if self.y != s2 {
                return Self::infinity();
            }
            return self.double();
        }

        let h = u2.sub(&self.x);
        let hh = h.square();
        let i = hh.double().double();
        let j = h.mul(&i);
        let r = s2.sub(&self.y).double();
        let v = self.x.mul(&i);
        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&self.y.mul(&j).double());
        let z3 = self.z.add(&h).square().sub(&z1z1).sub(&hh);
        Self { x: x3, y: y3, z: z3 }
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Double-and-add scalar multiplication by a public scalar given as
    /// big-endian bits. `side-channel-resistance` additionally performs a
    /// dummy addition on zero bits so the instruction trace does not depend
    /// on the scalar.
    pub fn multiply_bits(&self, bits: impl Iterator<Item = bool>) -> Self {
        let mut result = Self::infinity();
        for bit in bits {
            result = result.double();
            if bit {
                result = result.add(self);
            } else if cfg!(feature = "side-channel-resistance") {
                let _dummy = result.add(self);
                core::hint::black_box(_dummy);
            }
        }
        result
    }
}

impl<C: CurveConfig> PartialEq for Projective<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() == other.is_zero();
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x.mul(&z2z2) != other.x.mul(&z1z1) {
            return false;
        }
        self.y.mul(&other.z).mul(&z2z2) == other.y.mul(&self.z).mul(&z1z1)
    }
}
impl<C: CurveConfig> Eq for Projective<C> {}
