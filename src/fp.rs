//! Montgomery-form prime field arithmetic, parameterized by modulus.
//!
//! `Fp<C, N>` stores `x * R mod p` where `R = 2^(64*N) mod p`, for a modulus
//! `p` and its Montgomery machinery supplied by the `C: MontConfig<N>`
//! associated constants. All four instantiations this crate needs (`Fq`,
//! `Fr`) bind `N` and the constants; no part of this module is specific to
//! either.
//!
//! The stored `BigInt<N>` is always fully reduced: `0 <= x*R < p`.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use crate::bigint::BigInt;
use crate::rng::SecureRng;

/// Compile-time parameters of a Montgomery-form prime field.
///
/// `N` is the limb count (64-bit limbs) of the modulus.
pub trait MontConfig<const N: usize>: 'static + Copy + Clone + PartialEq + Eq {
    /// The modulus `p`, in canonical (non-Montgomery) form.
    const MODULUS: BigInt<N>;
    /// `R = 2^(64*N) mod p`, i.e. the Montgomery representation of `1`.
    const R: BigInt<N>;
    /// `R^2 mod p`, used to convert a canonical integer into Montgomery form.
    const R2: BigInt<N>;
    /// `-p^-1 mod 2^64`, the CIOS reduction constant.
    const INV: u64;
    /// A fixed quadratic non-residue, used by `Fp::legendre`'s callers and by
    /// Tonelli-Shanks-style square roots in concrete instantiations.
    const NONRESIDUE: BigInt<N>;
}

/// A Montgomery-form element of `Z/pZ` for the modulus bound by `C`.
#[derive(Clone, Copy)]
pub struct Fp<C: MontConfig<N>, const N: usize>(pub(crate) BigInt<N>, PhantomData<C>);

impl<C: MontConfig<N>, const N: usize> Fp<C, N> {
    /// The additive identity.
    pub const ZERO: Self = Self(BigInt::ZERO, PhantomData);
    /// The multiplicative identity (stored as Montgomery-form `R`).
    pub const ONE: Self = Self(C::R, PhantomData);

    /// Wraps an already-Montgomery-form limb vector without checking that it
    /// is canonically reduced. Used internally for hardcoded constants that
    /// are known-reduced by construction.
    pub const fn from_montgomery_unchecked(limbs: BigInt<N>) -> Self {
        Self(limbs, PhantomData)
    }

    /// Converts a canonical (non-Montgomery) integer into this field,
    /// reducing modulo `p` first if necessary.
    pub fn from_canonical(mut x: BigInt<N>) -> Self {
        if x.cmp(&C::MODULUS) != Ordering::Less {
            x = Self::reduce_once(x);
        }
        Self(Self::mont_mul(&x, &C::R2), PhantomData)
    }

    /// Converts back to a canonical (non-Montgomery) integer.
    pub fn into_canonical(self) -> BigInt<N> {
        Self::mont_mul(&self.0, &BigInt::new({
            let mut one = [0u64; N];
            one[0] = 1;
            one
        }))
    }

    fn reduce_once(x: BigInt<N>) -> BigInt<N> {
        let (diff, borrow) = x.sub_with_borrow(&C::MODULUS);
        if borrow {
            x
        } else {
            diff
        }
    }

    /// CIOS Montgomery multiplication: given `a, b` already in Montgomery
    /// form (or any `BigInt<N> < p` when used for conversion), produces
    /// `a * b * R^-1 mod p`.
    fn mont_mul(a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
        let mut t = [0u64; N + 2];
        for i in 0..N {
            // t += a[i] * b
            let mut carry = 0u128;
            let ai = a.0[i] as u128;
            for j in 0..N {
                let sum = ai * (b.0[j] as u128) + t[j] as u128 + carry;
                t[j] = sum as u64;
                carry = sum >> 64;
            }
            let sum = t[N] as u128 + carry;
            t[N] = sum as u64;
            t[N + 1] += (sum >> 64) as u64;

            // m = t[0] * (-p^-1 mod 2^64)
            let m = t[0].wrapping_mul(C::INV);
            let mut carry = 0u128;
            let mm = m as u128;
            for j in 0..N {
                let sum = mm * (C::MODULUS.0[j] as u128) + t[j] as u128 + carry;
                t[j] = sum as u64;
                carry = sum >> 64;
            }
            let sum = t[N] as u128 + carry;
            t[N] = sum as u64;
            t[N + 1] += (sum >> 64) as u64;

            // Shift one limb right (division by the current radix step);
            // t[0] is guaranteed zero by construction of m.
            for k in 0..(N + 1) {
                t[k] = t[k + 1];
            }
            t[N + 1] = 0;
        }

        let mut out = [0u64; N];
        out.copy_from_slice(&t[..N]);
        let out = BigInt::new(out);
        if t[N] != 0 {
            // One extra limb survived: the true value is >= p, the final
            // conditional subtraction below still reduces it correctly
            // because out already equals (true value) mod 2^(64N).
            return out.sub_with_borrow(&C::MODULUS).0;
        }
        Self::reduce_once(out)
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = self.0.add_with_carry(&rhs.0);
        let reduced = if carry {
            sum.sub_with_borrow(&C::MODULUS).0
        } else {
            Self::reduce_once(sum)
        };
        Self(reduced, PhantomData)
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = self.0.sub_with_borrow(&rhs.0);
        let fixed = if borrow {
            diff.add_with_carry(&C::MODULUS).0
        } else {
            diff
        };
        Self(fixed, PhantomData)
    }

    /// `2 * self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            Self(C::MODULUS.sub_with_borrow(&self.0).0, PhantomData)
        }
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(Self::mont_mul(&self.0, &rhs.0), PhantomData)
    }

    /// `self^2`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Returns `true` if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Left-to-right square-and-multiply exponentiation by a public exponent.
    /// Leaks the bit length of `exp`; use [`Self::pow_constant_time`] when the
    /// exponent is secret and `side-channel-resistance` matters.
    pub fn pow(&self, exp: &[u64]) -> Self {
        let mut result = Self::ONE;
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

    /// Same contract as [`Self::pow`], but every iteration performs both the
    /// square and a dummy multiply, so the sequence of operations does not
    /// depend on `exp`'s bits.
    pub fn pow_constant_time(&self, exp: &[u64]) -> Self {
        let mut result = Self::ONE;
        let mut scratch;
        for &word in exp.iter().rev() {
            for i in (0..64).rev() {
                result = result.square();
                let candidate = result.mul(self);
                if (word >> i) & 1 == 1 {
                    result = candidate;
                } else {
                    scratch = candidate;
                    core::hint::black_box(&mut scratch);
                }
            }
        }
        result
    }

    /// Legendre symbol: `1` if `self` is a nonzero quadratic residue, `-1` if
    /// a non-residue, `0` if `self` is zero.
    pub fn legendre(&self) -> i32 {
        if self.is_zero() {
            return 0;
        }
        let mut exp = C::MODULUS;
        // exponent = (p - 1) / 2
        exp = exp.sub_with_borrow(&{
            let mut one = [0u64; N];
            one[0] = 1;
            BigInt::new(one)
        }).0;
        exp = exp.shr1();
        let result = self.pow(&exp.0);
        if result == Self::ONE {
            1
        } else if result.is_zero() {
            0
        } else {
            -1
        }
    }

    /// Multiplicative inverse via the binary extended-GCD variant that keeps
    /// the Bezout trackers reduced mod `p` throughout (Guajardo-Kumar-Paar-
    /// Pelzl), operating on canonical (non-Montgomery) integers. Returns
    /// zero (rather than signaling) when `self` is zero, matching the
    /// reference library's documented degenerate behavior.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let one = Self::one_bigint();
        let mut u = self.into_canonical();
        let mut v = C::MODULUS;
        let mut x1 = one;
        let mut x2 = BigInt::<N>::ZERO;

        while u != one && v != one {
            while u.0[0] & 1 == 0 {
                u = u.shr1();
                x1 = Self::half(x1);
            }
            while v.0[0] & 1 == 0 {
                v = v.shr1();
                x2 = Self::half(x2);
            }
            if u.cmp(&v) != Ordering::Less {
                u = u.sub_with_borrow(&v).0;
                x1 = Self::sub_field(&x1, &x2);
            } else {
                v = v.sub_with_borrow(&u).0;
                x2 = Self::sub_field(&x2, &x1);
            }
        }
        let canonical_inverse = if u == one { x1 } else { x2 };
        Self::from_canonical(canonical_inverse)
    }

    fn one_bigint() -> BigInt<N> {
        let mut one = [0u64; N];
        one[0] = 1;
        BigInt::new(one)
    }

    /// Halves `x` modulo `p`, where `x` is already reduced mod `p`.
    fn half(x: BigInt<N>) -> BigInt<N> {
        if x.0[0] & 1 == 0 {
            x.shr1()
        } else {
            let (sum, carry) = x.add_with_carry(&C::MODULUS);
            let shifted = sum.shr1();
            if carry {
                // `sum` overflowed N limbs; the missing top bit of the true
                // (N+1)-limb sum must be restored before shifting it in.
                let mut limbs = shifted.0;
                limbs[N - 1] |= 1u64 << 63;
                BigInt::new(limbs)
            } else {
                shifted
            }
        }
    }

    fn sub_field(a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
        let (diff, borrow) = a.sub_with_borrow(b);
        if borrow {
            diff.add_with_carry(&C::MODULUS).0
        } else {
            diff
        }
    }

    /// Writes the big-endian canonical (non-Montgomery) encoding of this
    /// element into `out`. `out.len()` must equal `8 * N`.
    pub fn to_be_bytes(&self, out: &mut [u8]) {
        self.into_canonical().to_be_bytes(out);
    }

    /// Reads a big-endian canonical encoding, reducing mod `p` if the value
    /// is out of range. `bytes.len()` must equal `8 * N`.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_canonical(BigInt::from_be_bytes(bytes))
    }
}

impl<C: MontConfig<N>, const N: usize> PartialEq for Fp<C, N> {
    fn eq(&self, other: &Self) -> bool {
        if cfg!(feature = "side-channel-resistance") {
            let mut acc = 0u64;
            for i in 0..N {
                acc |= self.0 .0[i] ^ other.0 .0[i];
            }
            acc == 0
        } else {
            self.0 == other.0
        }
    }
}
impl<C: MontConfig<N>, const N: usize> Eq for Fp<C, N> {}

impl<C: MontConfig<N>, const N: usize> fmt::Debug for Fp<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({:?})", self.into_canonical())
    }
}

/// Draws a uniformly random field element by rejection sampling: fill
/// `N * 8` bytes, mask the bits above the modulus's bit length, reject if the
/// sample is `>= p`.
pub fn random_fp<C: MontConfig<N>, const N: usize>(
    rng: &mut impl SecureRng,
    modulus_bits: u32,
) -> Fp<C, N> {
    loop {
        let mut limbs = [0u64; N];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u64();
        }
        let total_bits = 64 * N as u32;
        let unused = total_bits - modulus_bits;
        if unused > 0 {
            let top = N - 1;
            limbs[top] &= u64::MAX >> unused;
        }
        let candidate = BigInt::new(limbs);
        if candidate.cmp(&C::MODULUS) == Ordering::Less {
            return Fp::from_canonical(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq)]
    struct Mod17;
    // p = 17 represented in a single 64-bit limb, Montgomery R = 2^64 mod 17.
    impl MontConfig<1> for Mod17 {
        const MODULUS: BigInt<1> = BigInt::new([17]);
        // 2^64 mod 17 = 16
        const R: BigInt<1> = BigInt::new([16]);
        // 16^2 mod 17 = 1
        const R2: BigInt<1> = BigInt::new([1]);
        // -17^-1 mod 2^64
        const INV: u64 = 0x0f0f_0f0f_0f0f_0f0f;
        const NONRESIDUE: BigInt<1> = BigInt::new([3]);
    }

    type F17 = Fp<Mod17, 1>;

    #[test]
    fn add_and_sub_are_inverse() {
        let a = F17::from_canonical(BigInt::new([5]));
        let b = F17::from_canonical(BigInt::new([9]));
        let sum = a.add(&b);
        assert_eq!(sum.sub(&b), a);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let a = F17::from_canonical(BigInt::new([5]));
        assert_eq!(a.mul(&F17::ONE), a);
    }

    #[test]
    fn canonical_roundtrip() {
        let a = F17::from_canonical(BigInt::new([12]));
        assert_eq!(a.into_canonical(), BigInt::new([12]));
    }
}
