//! Group law and scalar-multiplication consistency checks for `G1`/`G2`,
//! including that the GLV/GLS endomorphism-accelerated paths agree with
//! plain double-and-add.

use bls12_381_pairing::curve::CurveConfig;
use bls12_381_pairing::{fr, g1, g2, Fr};

mod common;
use common::TestRng;

fn naive_multiply_g1(p: &g1::Affine, k: &Fr) -> g1::Projective {
    let base = g1::Projective::from_affine(p);
    let bits = k.into_canonical();
    let highest = bits.highest_set_bit().unwrap_or(0);
    base.multiply_bits((0..=highest).rev().map(|i| bits.bit(i)))
}

fn naive_multiply_g2(p: &g2::Affine, k: &Fr) -> g2::Projective {
    let base = g2::Projective::from_affine(p);
    let bits = k.into_canonical();
    let highest = bits.highest_set_bit().unwrap_or(0);
    base.multiply_bits((0..=highest).rev().map(|i| bits.bit(i)))
}

#[test]
fn g1_generator_is_on_curve_and_not_infinity() {
    let g = g1::G1Config::generator();
    assert!(g.is_on_curve());
    assert!(!g.infinity);
}

#[test]
fn g2_generator_is_on_curve_and_not_infinity() {
    let g = g2::G2Config::generator();
    assert!(g.is_on_curve());
    assert!(!g.infinity);
}

#[test]
fn g1_glv_multiplication_matches_double_and_add() {
    let mut rng = TestRng::seeded(1);
    let g = g1::G1Config::generator();
    for _ in 0..8 {
        let k = fr::random(&mut rng);
        let glv = g1::multiply_glv(&g, &k);
        let naive = naive_multiply_g1(&g, &k);
        assert_eq!(glv.to_affine(), naive.to_affine());
    }
}

#[test]
fn g2_gls_multiplication_matches_double_and_add() {
    let mut rng = TestRng::seeded(2);
    let g = g2::G2Config::generator();
    for _ in 0..8 {
        let k = fr::random(&mut rng);
        let gls = g2::multiply_gls(&g, &k);
        let naive = naive_multiply_g2(&g, &k);
        assert_eq!(gls.to_affine(), naive.to_affine());
    }
}

#[test]
fn g1_point_addition_is_associative() {
    let mut rng = TestRng::seeded(3);
    let g = g1::G1Config::generator();
    for _ in 0..8 {
        let a = g1::multiply_glv(&g, &fr::random(&mut rng));
        let b = g1::multiply_glv(&g, &fr::random(&mut rng));
        let c = g1::multiply_glv(&g, &fr::random(&mut rng));
        let lhs = a.add(&b).add(&c);
        let rhs = a.add(&b.add(&c));
        assert_eq!(lhs.to_affine(), rhs.to_affine());
    }
}

#[test]
fn g1_scalar_mult_distributes_over_scalar_addition() {
    let mut rng = TestRng::seeded(4);
    let g = g1::G1Config::generator();
    for _ in 0..8 {
        let k1 = fr::random(&mut rng);
        let k2 = fr::random(&mut rng);
        let sum = k1.add(&k2);
        let lhs = g1::multiply_glv(&g, &sum);
        let rhs = g1::multiply_glv(&g, &k1).add(&g1::multiply_glv(&g, &k2));
        assert_eq!(lhs.to_affine(), rhs.to_affine());
    }
}

#[test]
fn g1_hash_to_curve_then_cofactor_clearing_lands_on_curve() {
    let mut rng = TestRng::seeded(5);
    for _ in 0..4 {
        let message = rng_bytes(&mut rng);
        let p = g1::try_and_increment(&message);
        assert!(p.is_on_curve());
        let cleared = g1::clear_cofactor(&g1::Projective::from_affine(&p));
        let cleared_affine = cleared.to_affine();
        assert!(cleared_affine.is_on_curve());
    }
}

fn rng_bytes(rng: &mut TestRng) -> [u8; 32] {
    use rand_core::RngCore;
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    bytes
}
