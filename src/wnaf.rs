//! Windowed non-adjacent form (w-NAF) scalar recoding.
//!
//! Converts a scalar's binary representation into a signed-digit form with
//! fewer nonzero digits, reducing the number of point additions a
//! double-and-add scalar multiplication needs. `naf_bits` produces the
//! simplest (width-2) NAF, one signed bit per position, which is what the
//! GLV half-scalars in [`crate::g1`] consume; `windowed` produces the
//! general width-`w` form for precomputed-table scalar multiplication.

extern crate alloc;

use crate::bigint::BigInt;

/// Computes the width-2 NAF of `k`, least-significant digit first. Each
/// entry is `-1`, `0`, or `1`; no two adjacent entries are both nonzero.
pub fn naf_bits<const N: usize>(k: &BigInt<N>) -> alloc::vec::Vec<i8> {
    let mut digits = alloc::vec::Vec::with_capacity(64 * N + 1);
    let mut value = *k;
    while !value.is_zero() {
        if value.0[0] & 1 == 1 {
            // di = 2 - (value mod 4) picks +-1 so the result stays even
            // after subtracting di, guaranteeing the next digit is 0.
            let mod4 = value.0[0] & 3;
            let di: i8 = if mod4 == 3 { -1 } else { 1 };
            digits.push(di);
            if di == 1 {
                value = value.sub_with_borrow(&one()).0;
            } else {
                value = value.add_with_carry(&one()).0;
            }
        } else {
            digits.push(0);
        }
        value = value.shr1();
    }
    digits
}

fn one<const N: usize>() -> BigInt<N> {
    let mut limbs = [0u64; N];
    limbs[0] = 1;
    BigInt::new(limbs)
}

/// Computes the general width-`w` NAF of `k`, least-significant digit
/// first. Nonzero digits are odd and lie in `(-2^(w-1), 2^(w-1))`; any run
/// of `w` consecutive digits contains at most one nonzero entry.
pub fn windowed<const N: usize>(k: &BigInt<N>, w: u32) -> alloc::vec::Vec<i32> {
    debug_assert!(w >= 2);
    let modulus = 1i64 << w;
    let half = modulus / 2;
    let mut digits = alloc::vec::Vec::with_capacity(64 * N / (w as usize) + 2);
    let mut value = *k;
    while !value.is_zero() {
        if value.0[0] & 1 == 1 {
            let window = (value.0[0] & (modulus as u64 - 1)) as i64;
            let di = if window >= half { window - modulus } else { window };
            digits.push(di as i32);
            if di >= 0 {
                value = value.sub_with_borrow(&scalar_bigint(di as u64)).0;
            } else {
                value = value.add_with_carry(&scalar_bigint((-di) as u64)).0;
            }
        } else {
            digits.push(0);
        }
        value = value.shr1();
    }
    digits
}

fn scalar_bigint<const N: usize>(v: u64) -> BigInt<N> {
    let mut limbs = [0u64; N];
    limbs[0] = v;
    BigInt::new(limbs)
}

/// Precomputed odd multiples `[1*p, 3*p, 5*p, ..., (2^(w-1)-1)*p]` of a
/// point, the table a width-`w` windowed scalar multiplication scans
/// against. Generic over any type with a `double`/`add` pair, so it serves
/// both `g1::Projective` and `g2::Projective`.
pub fn odd_multiples_table<P, D, A>(base: &P, w: u32, double: D, add: A) -> alloc::vec::Vec<P>
where
    P: Copy,
    D: Fn(&P) -> P,
    A: Fn(&P, &P) -> P,
{
    let count = 1usize << (w - 1);
    let doubled = double(base);
    let mut table = alloc::vec::Vec::with_capacity(count);
    table.push(*base);
    for i in 1..count {
        let next = add(&table[i - 1], &doubled);
        table.push(next);
    }
    table
}
