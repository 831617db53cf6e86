//! The optimal Ate pairing over BLS12-381: Miller loop plus final
//! exponentiation, and the multi-pairing batching used by WKD-IBE/LQIBE
//! verification.

extern crate alloc;

use crate::curve::CurveConfig;
use crate::fq::Fq;
use crate::fq12::Fq12;
use crate::fq2::Fq2;
use crate::g1::Affine as G1Affine;
use crate::g2::{Affine as G2Affine, G2Config, Projective as G2Projective};

/// `x` is negative for BLS12-381 (`x = -0xd201000000010000`); the Miller
/// loop runs over `|x|` and the sign is corrected by conjugating its
/// output, equivalent to inverting `f`.
const X_IS_NEGATIVE: bool = true;

fn x_naf_msb_first() -> alloc::vec::Vec<i8> {
    let x_abs = crate::bigint::BigInt::<1>::new([crate::g2::X_ABS]);
    let mut digits = crate::wnaf::naf_bits(&x_abs);
    digits.reverse();
    digits
}

fn two_inv() -> Fq {
    Fq::from_canonical(crate::bigint::BigInt::new([2, 0, 0, 0, 0, 0])).inverse()
}

fn g2_b() -> Fq2 {
    G2Config::B
}

/// A `G2` point with its Miller-loop line-function coefficients
/// precomputed, so repeated pairings against the same `G2` element (common
/// in WKD-IBE decryption, which pairs many `G1` ciphertext parts against one
/// fixed public-parameter element) avoid recomputing them.
pub struct G2Prepared {
    coeffs: alloc::vec::Vec<(Fq2, Fq2, Fq2)>,
    infinity: bool,
}

impl G2Prepared {
    /// Precomputes the line-function coefficients for one Miller loop
    /// against `q`.
    pub fn from_affine(q: &G2Affine) -> Self {
        if q.infinity {
            return Self {
                coeffs: alloc::vec::Vec::new(),
                infinity: true,
            };
        }
        let mut coeffs = alloc::vec::Vec::new();
        let mut r = G2Projective::from_affine(q);
        let q_neg = q.neg();

        for &digit in x_naf_msb_first().iter() {
            coeffs.push(doubling_step(&mut r));
            if digit == 1 {
                coeffs.push(addition_step(&mut r, q));
            } else if digit == -1 {
                coeffs.push(addition_step(&mut r, &q_neg));
            }
        }
        Self {
            coeffs,
            infinity: false,
        }
    }
}

/// Computes the tangent line's coefficients at `r` (dbl-2009-l-derived,
/// following the usual `(a, b, c) = (-h, 3j, i)` line-function layout for
/// short-Weierstrass doubling) and doubles `r` in place.
fn doubling_step(r: &mut G2Projective) -> (Fq2, Fq2, Fq2) {
    let half = two_inv();
    let a = r.x.mul(&r.y).mul_by_fq(&half);
    let b = r.y.square();
    let c = r.z.square();
    let d = c.double().add(&c);
    let e = g2_b().mul(&d);
    let f = e.double().add(&e);
    let g = b.add(&f).mul_by_fq(&half);
    let h = r.y.add(&r.z).square().sub(&b).sub(&c);
    let i = e.sub(&b);
    let j = r.x.square();
    let e_sq = e.square();

    let new_x = a.mul(&b.sub(&f));
    let new_y = g.square().sub(&e_sq.double().add(&e_sq));
    let new_z = b.mul(&h);
    *r = G2Projective {
        x: new_x,
        y: new_y,
        z: new_z,
    };

    (h.neg(), j.double().add(&j), i)
}

/// Computes the chord line's coefficients for `r + q` and updates `r` in
/// place (add-2007-bl-derived, `q` affine).
fn addition_step(r: &mut G2Projective, q: &G2Affine) -> (Fq2, Fq2, Fq2) {
    let theta = r.y.sub(&q.y.mul(&r.z));
    let lambda = r.x.sub(&q.x.mul(&r.z));
    let c = theta.square();
    let d = lambda.square();
    let e = lambda.mul(&d);
    let f = r.z.mul(&c);
    let g = r.x.mul(&d);
    let h = e.add(&f).sub(&g.double());
    let new_x = lambda.mul(&h);
    let new_y = theta.mul(&g.sub(&h)).sub(&e.mul(&r.y));
    let new_z = r.z.mul(&e);
    let j = theta.mul(&q.x).sub(&lambda.mul(&q.y));

    *r = G2Projective {
        x: new_x,
        y: new_y,
        z: new_z,
    };
    (lambda, theta.neg(), j)
}

/// Evaluates one precomputed line at `p` and folds it into the running
/// Miller-loop accumulator `f` via the sparse `c0/c1/c4` multiplication.
fn ell(f: Fq12, coeffs: &(Fq2, Fq2, Fq2), p: &G1Affine) -> Fq12 {
    let c0 = coeffs.0.mul_by_fq(&p.y);
    let c1 = coeffs.1.mul_by_fq(&p.x);
    f.multiply_by_c014(&coeffs.2, &c1, &c0)
}

/// Runs the Miller loop of the optimal Ate pairing `e(p, q)`, returning the
/// (not yet final-exponentiated) element of `Fq12`.
pub fn miller_loop(p: &G1Affine, prepared: &G2Prepared) -> Fq12 {
    if p.infinity || prepared.infinity {
        return Fq12::one();
    }
    let mut f = Fq12::one();
    let mut idx = 0;
    for &digit in x_naf_msb_first().iter() {
        f = f.square();
        f = ell(f, &prepared.coeffs[idx], p);
        idx += 1;
        if digit != 0 {
            f = ell(f, &prepared.coeffs[idx], p);
            idx += 1;
        }
    }
    if X_IS_NEGATIVE {
        f = f.conjugate();
    }
    f
}

/// Computes `e(p, q)`, the full pairing including final exponentiation.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Fq12 {
    let prepared = G2Prepared::from_affine(q);
    let f = miller_loop(p, &prepared);
    final_exponentiation(&f)
}

/// Computes `prod_i e(ps[i], qs[i])` with a single shared final
/// exponentiation, the batching WKD-IBE/LQIBE verification relies on.
pub fn multi_pairing(pairs: &[(G1Affine, G2Affine)]) -> Fq12 {
    let mut f = Fq12::one();
    for (p, q) in pairs {
        let prepared = G2Prepared::from_affine(q);
        f = f.mul(&miller_loop(p, &prepared));
    }
    final_exponentiation(&f)
}

/// Final exponentiation: the "easy part" (`f^((q^6-1)(q^2+1))`, computed
/// with a Frobenius map, a conjugation and an inversion) followed by the
/// "hard part" (the Fuentes-Castaneda et al. addition chain in powers of
/// `x`, expressed through repeated calls to [`exp_by_x`]).
pub fn final_exponentiation(f: &Fq12) -> Fq12 {
    let f1 = f.conjugate().mul(&f.inverse());
    let f2 = f1.frobenius_map(2).mul(&f1);

    let y0 = f2.cyclotomic_square();
    let y1 = exp_by_x(&f2);
    let y2 = f2.conjugate();
    let y1 = y1.mul(&y2);
    let y2 = exp_by_x(&y1);
    let y1 = y1.conjugate();
    let y1 = y1.mul(&y2);
    let y2 = exp_by_x(&y1);
    let y1 = y1.frobenius_map(1);
    let y1 = y1.mul(&y2);
    let y2 = exp_by_x(&y1);
    let y2 = y2.frobenius_map(2);
    let y3 = f2.conjugate();
    let y3 = y3.mul(&y0);
    let y3 = y3.frobenius_map(1);
    let y3 = y3.mul(&y2);
    let y2 = exp_by_x(&y3);
    let y2 = y2.mul(&y0);
    let y2 = exp_by_x(&y2);
    let y2 = y2.mul(&y1);
    let y2 = y2.mul(&f2);
    y3.mul(&y2)
}

/// `f^|x|` via square-and-multiply on the 64-bit magnitude `X_ABS`,
/// substituting the cheaper [`Fq12::cyclotomic_square`] for the generic
/// squaring since every value here lives in the order-`r` cyclotomic
/// subgroup produced by the easy part.
fn exp_by_x(f: &Fq12) -> Fq12 {
    let mut result = Fq12::one();
    for i in (0..64).rev() {
        result = result.cyclotomic_square();
        if (crate::g2::X_ABS >> i) & 1 == 1 {
            result = result.mul(f);
        }
    }
    if X_IS_NEGATIVE {
        result = result.conjugate();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_of_infinity_is_one() {
        let p = G1Affine::infinity();
        let q = G2Config::generator();
        assert_eq!(pairing(&p, &q), Fq12::one());
    }

    #[test]
    fn bilinearity_under_scalar_two() {
        let g1 = crate::g1::G1Config::generator();
        let g2 = G2Config::generator();
        let two = crate::fr::Fr::from_canonical(crate::bigint::BigInt::new([2, 0, 0, 0]));
        let doubled_g1 = crate::g1::multiply_glv(&g1, &two).to_affine();

        let lhs = pairing(&doubled_g1, &g2);
        let rhs = pairing(&g1, &g2).square();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn multi_pairing_of_two_matches_product_of_pairings() {
        let g1 = crate::g1::G1Config::generator();
        let g2 = G2Config::generator();
        let lhs = multi_pairing(&[(g1, g2), (g1, g2)]);
        let rhs = pairing(&g1, &g2).square();
        assert_eq!(lhs, rhs);
    }
}
