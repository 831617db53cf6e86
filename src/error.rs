//! Error kinds.
//!
//! Deliberately narrow, matching the three failure modes the arithmetic core
//! can actually produce: everything else (out-of-memory, I/O failure) does
//! not arise because the library never allocates or performs I/O. Arithmetic
//! misuse outside a decode boundary (non-canonical `Fp` inputs, off-curve
//! `Projective` values constructed by hand) is the caller's responsibility
//! and is asserted against in debug builds rather than reported here.

/// Failure to decode a serialized group element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The infinity flag was set but the remaining payload bits were nonzero.
    #[error("infinity flag set with nonzero payload bits")]
    InvalidEncodingFlags,
    /// An uncompressed encoding had the greater-y flag set.
    #[error("greater-y flag set on an uncompressed encoding")]
    GreaterFlagOnUncompressed,
    /// The compressed flag did not match the format the caller requested.
    #[error("compressed flag did not match the expected encoding format")]
    CompressedFlagMismatch,
    /// The candidate x coordinate has no square root (point is off-curve).
    #[error("x coordinate does not correspond to a point on the curve")]
    NotOnCurve,
    /// The point is on the curve but outside the prime-order subgroup.
    #[error("point is not in the r-subgroup")]
    NotInSubgroup,
}

/// Failure to decode a marshalled WKD-IBE/LQIBE structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LengthMismatchError {
    /// The buffer length is not compatible with any valid `(l, signatures)` pair.
    #[error("buffer length {len} is not valid for any (slot count, signature-support) pair")]
    Params {
        /// Offending buffer length, in bytes.
        len: usize,
    },
    /// A `SecretKey`'s free-slot region did not divide evenly into entries.
    #[error("secret key free-slot region of length {len} does not divide into whole entries")]
    SecretKey {
        /// Offending buffer length, in bytes.
        len: usize,
    },
    /// A buffer was shorter than the minimum fixed-size header it must contain.
    #[error("buffer of length {len} is shorter than the minimum {min} required")]
    TooShort {
        /// Actual buffer length.
        len: usize,
        /// Minimum required length.
        min: usize,
    },
}

/// Errors surfaced by the WKD-IBE / LQIBE scheme layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemeError {
    /// Wraps a group-element decode failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Wraps a marshalled-buffer length failure.
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatchError),
    /// An attribute slot index was out of the configured range `[0, l)`.
    #[error("attribute slot {slot} is out of range for l = {l}")]
    SlotOutOfRange {
        /// Offending slot index.
        slot: u32,
        /// Configured slot count.
        l: u32,
    },
    /// `qualify` was called with a target attribute set that does not extend
    /// the source key's attribute set.
    #[error("qualification target does not extend the source key's attribute set")]
    NotAnExtension,
    /// Signature verification failed.
    #[error("signature verification failed")]
    VerifyFailed,
    /// `sign`/`verify` was invoked on parameters without signature support.
    #[error("signature support is not enabled for these parameters")]
    SignaturesDisabled,
}

/// Tonelli-Shanks exceeded its iteration bound (32, the 2-adicity of `r-1`).
/// Indicates a logic error (a non-residue was fed in) rather than a
/// reachable runtime condition for callers who check `legendre` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tonelli-shanks exceeded the maximum iteration bound")]
pub struct TonelliShanksError;
