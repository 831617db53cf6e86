//! BLS12-381 pairing arithmetic, from the limb level up, plus two pairing-based
//! identity-based encryption schemes built on top of it.
//!
//! This crate implements its own `BigInt`/Montgomery `Fp` backend, the tower
//! extension fields `Fq2`/`Fq6`/`Fq12`, the `G1`/`G2` curve groups with their
//! GLV/GLS endomorphism-accelerated scalar multiplication, and the optimal
//! Ate pairing — rather than wrapping an existing pairing library — because
//! the point of this crate is to *be* that arithmetic layer. Two schemes are
//! built directly on it: [`lqibe`] (the Lewko-Quinn identity-based encryption
//! scheme) and [`wkdibe`] (wildcarded key-delegation identity-based
//! encryption, with an integrated signature scheme).
//!
//! ## Invariants
//!
//! - **No platform entropy source.** Every sampling routine (`Fq`/`Fr`
//!   rejection sampling, random curve points, ephemeral scalars in the
//!   encryption schemes) is generic over [`rng::SecureRng`] rather than
//!   reaching for `OsRng` or any other concrete source; see `rng.rs`.
//! - **Canonical-field invariant.** Every `Fp<C, N>` value held outside a
//!   decode boundary is reduced modulo its field's modulus; decoding from
//!   bytes is the only place out-of-range input is rejected rather than
//!   silently wrapped.
//! - **No silent UB.** `#![forbid(unsafe_code)]` throughout; failures surface
//!   as [`error::DecodeError`] / [`error::SchemeError`] / [`error::TonelliShanksError`],
//!   never a panic outside a documented precondition violation.
//!
//! ## Feature flags
//!
//! - `std` (default): enables `thiserror`'s `std::error::Error` impl and
//!   `rand`'s `std` feature for downstream convenience; the crate's own
//!   arithmetic is `no_std` regardless.
//! - `alloc` (default, implied by `std`): enables the `Vec`-returning APIs
//!   (`lqibe`'s symmetric-key derivation, `wkdibe`'s variable-length
//!   marshalling, `pairing::multi_pairing`).
//! - `side-channel-resistance`: swaps a small number of variable-time
//!   branches (`G1`/`G2` affine conversion, `Fq2::square_root`) for
//!   constant-weight equivalents, at a performance cost; see `DESIGN.md`
//!   decision 2 for the exact call sites this does and does not currently
//!   cover.
//! - `portable`: placeholder for a future pure-Rust-only build (no target
//!   feature detection); currently has no effect, reserved per `SPEC_FULL.md`.
//! - `serde`: derives `Serialize`/`Deserialize` for the scheme-level wire
//!   types.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Fixed-width unsigned integers (`BigInt<N>`) and their limb-level
/// arithmetic: the substrate every field type is built from.
pub mod bigint;
/// Decode/scheme failure types shared across the crate.
pub mod error;
/// Generic Montgomery-form prime field `Fp<C, N>`.
pub mod fp;
/// The base field `Fq` (`G1`/`G2`'s coordinate field, `Fq2`'s base field).
pub mod fq;
/// The scalar field `Fr` (point-group order; identities, ephemeral scalars).
pub mod fr;
/// The quadratic extension `Fq2 = Fq[u]/(u^2+1)`.
pub mod fq2;
/// The cubic extension `Fq6 = Fq2[v]/(v^3-xi)`.
pub mod fq6;
/// The full extension `Fq12 = Fq6[w]/(w^2-v)`, the pairing's target group.
pub mod fq12;
/// Generic short Weierstrass affine/Jacobian curve arithmetic.
pub mod curve;
/// The `G1` curve group over `Fq`, with GLV scalar decomposition.
pub mod g1;
/// The `G2` curve group over `Fq2`, with GLS scalar decomposition.
pub mod g2;
/// Windowed non-adjacent form (w-NAF) scalar representation.
pub mod wnaf;
/// The optimal Ate pairing: Miller loop, final exponentiation, multi-pairing.
pub mod pairing;
/// Compressed/uncompressed point encodings for `G1`/`G2`.
pub mod encoding;
/// The randomness-source boundary (`SecureRng`).
pub mod rng;
/// The Lewko-Quinn identity-based encryption scheme.
pub mod lqibe;
/// Wildcarded key-delegation identity-based encryption, plus its signature
/// scheme.
pub mod wkdibe;

pub use error::{DecodeError, LengthMismatchError, SchemeError, TonelliShanksError};
pub use fq::Fq;
pub use fq12::Fq12;
pub use fq2::Fq2;
pub use fq6::Fq6;
pub use fr::Fr;
pub use rng::SecureRng;

/// `G1`'s affine point representation.
pub type G1Affine = g1::Affine;
/// `G1`'s Jacobian-projective point representation.
pub type G1Projective = g1::Projective;
/// `G2`'s affine point representation.
pub type G2Affine = g2::Affine;
/// `G2`'s Jacobian-projective point representation.
pub type G2Projective = g2::Projective;
/// The pairing's target group, `Fq12`'s cyclotomic subgroup.
pub type Gt = fq12::Fq12;
