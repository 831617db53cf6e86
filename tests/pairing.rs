//! Bilinearity and non-degeneracy checks for the optimal Ate pairing.

use bls12_381_pairing::curve::CurveConfig;
use bls12_381_pairing::{fr, g1, g2, pairing};

mod common;
use common::TestRng;

#[test]
fn pairing_is_bilinear_in_both_arguments() {
    let mut rng = TestRng::seeded(1);
    let p = g1::G1Config::generator();
    let q = g2::G2Config::generator();
    let a = fr::random(&mut rng);
    let b = fr::random(&mut rng);

    let ap = g1::multiply_glv(&p, &a).to_affine();
    let bq = g2::multiply_gls(&q, &b).to_affine();

    let lhs = pairing::pairing(&ap, &bq);

    let base = pairing::pairing(&p, &q);
    let exponent = a.mul(&b).into_canonical().0;
    let rhs = base.pow(&exponent);

    assert_eq!(lhs, rhs);
}

#[test]
fn pairing_is_additive_in_the_g1_argument() {
    let mut rng = TestRng::seeded(2);
    let p = g1::G1Config::generator();
    let q = g2::G2Config::generator();
    let a = fr::random(&mut rng);
    let b = fr::random(&mut rng);

    let ap = g1::multiply_glv(&p, &a).to_affine();
    let bp = g1::multiply_glv(&p, &b).to_affine();
    let sum = g1::multiply_glv(&p, &a.add(&b)).to_affine();

    let lhs = pairing::pairing(&sum, &q);
    let rhs = pairing::pairing(&ap, &q).mul(&pairing::pairing(&bp, &q));

    assert_eq!(lhs, rhs);
}

#[test]
fn pairing_is_nondegenerate() {
    let p = g1::G1Config::generator();
    let q = g2::G2Config::generator();
    let result = pairing::pairing(&p, &q);
    assert_ne!(result, bls12_381_pairing::Fq12::one());
}

#[test]
fn multi_pairing_agrees_with_the_product_of_individual_pairings() {
    let mut rng = TestRng::seeded(3);
    let p = g1::G1Config::generator();
    let q = g2::G2Config::generator();

    let a = fr::random(&mut rng);
    let b = fr::random(&mut rng);
    let ap = g1::multiply_glv(&p, &a).to_affine();
    let bq = g2::multiply_gls(&q, &b).to_affine();
    let bp = g1::multiply_glv(&p, &b).to_affine();
    let aq = g2::multiply_gls(&q, &a).to_affine();

    let multi = pairing::multi_pairing(&[(ap, bq), (bp, aq)]);
    let product = pairing::pairing(&ap, &bq).mul(&pairing::pairing(&bp, &aq));

    assert_eq!(multi, product);
}
