//! Limb-level arithmetic properties for `BigInt<N>`, independent of any
//! particular field modulus.

use bls12_381_pairing::bigint::BigInt;

mod common;
use common::TestRng;

#[test]
fn add_then_sub_recovers_original() {
    let mut rng = TestRng::seeded(1);
    for _ in 0..64 {
        let a = BigInt::<6>::random(&mut rng);
        let b = BigInt::<6>::random(&mut rng);
        let (sum, _) = a.add_with_carry(&b);
        let (back, borrow) = sum.sub_with_borrow(&b);
        assert!(!borrow);
        assert_eq!(back, a);
    }
}

#[test]
fn double_with_carry_matches_self_addition() {
    let mut rng = TestRng::seeded(2);
    for _ in 0..64 {
        let a = BigInt::<4>::random(&mut rng);
        let (doubled, carry1) = a.double_with_carry();
        let (added, carry2) = a.add_with_carry(&a);
        assert_eq!(doubled, added);
        assert_eq!(carry1, carry2);
    }
}

#[test]
fn shr1_undoes_shl1_when_no_overflow_bit_is_set() {
    let mut rng = TestRng::seeded(3);
    for _ in 0..64 {
        let mut a = BigInt::<4>::random(&mut rng);
        // clear the top bit so shl1 doesn't overflow out of 4 limbs
        a.0[3] &= !(1u64 << 63);
        let (shifted, overflow) = a.shl1();
        assert!(!overflow);
        assert_eq!(shifted.shr1(), a);
    }
}

#[test]
fn zero_is_zero() {
    assert!(BigInt::<4>::ZERO.is_zero());
    assert!(!BigInt::<4>::new([0, 0, 0, 1]).is_zero());
}

#[test]
fn big_endian_roundtrips() {
    let mut rng = TestRng::seeded(4);
    for _ in 0..32 {
        let a = BigInt::<6>::random(&mut rng);
        let mut bytes = [0u8; 48];
        a.to_be_bytes(&mut bytes);
        assert_eq!(BigInt::<6>::from_be_bytes(&bytes), a);
    }
}

#[test]
fn divmod_recovers_dividend() {
    let mut rng = TestRng::seeded(5);
    for _ in 0..64 {
        let a = BigInt::<4>::random(&mut rng);
        let mut divisor = BigInt::<4>::random(&mut rng);
        if divisor.is_zero() {
            divisor = BigInt::<4>::new([1, 0, 0, 0]);
        }
        let (q, r) = a.divmod(&divisor);
        // a == q * divisor + r, computed via wide multiply + add since BigInt
        // itself has no general-width multiply-and-add helper.
        let wide: [u64; 8] = q.mul_wide(&divisor);
        let mut product = BigInt::<4>::new([wide[0], wide[1], wide[2], wide[3]]);
        assert_eq!(wide[4..], [0, 0, 0, 0]);
        let (sum, carry) = product.add_with_carry(&r);
        product = sum;
        assert!(!carry);
        assert_eq!(product, a);
        assert_eq!(r.cmp(&divisor), std::cmp::Ordering::Less);
    }
}
