//! Fixed-length compressed/uncompressed encodings for `G1`/`G2` points.
//!
//! Mirrors the reference implementation's `Encoding<Affine, compressed>`
//! template: the encoded `x` coordinate carries three flag bits in its most
//! significant byte (free because `Fq`'s 381-bit range leaves the top 3 bits
//! of its 48-byte big-endian encoding always zero): `compressed` (bit 7),
//! `infinity` (bit 6), `greater-y` (bit 5, compressed encodings only).

use crate::curve::CurveField;
use crate::error::DecodeError;
use crate::fq::Fq;
use crate::fq2::Fq2;
use crate::g1::Affine as G1Affine;
use crate::g2::Affine as G2Affine;

const FLAG_COMPRESSED: u8 = 1 << 7;
const FLAG_INFINITY: u8 = 1 << 6;
const FLAG_GREATER: u8 = 1 << 5;
const FLAG_MASK: u8 = FLAG_COMPRESSED | FLAG_INFINITY | FLAG_GREATER;

/// Byte length of a compressed `G1` point.
pub const G1_COMPRESSED_SIZE: usize = 48;
/// Byte length of an uncompressed `G1` point.
pub const G1_UNCOMPRESSED_SIZE: usize = 96;
/// Byte length of a compressed `G2` point.
pub const G2_COMPRESSED_SIZE: usize = 96;
/// Byte length of an uncompressed `G2` point.
pub const G2_UNCOMPRESSED_SIZE: usize = 192;

fn fq_to_be(x: &Fq, out: &mut [u8]) {
    x.to_be_bytes(out);
}

fn fq_from_be(bytes: &[u8]) -> Fq {
    Fq::from_be_bytes(bytes)
}

/// Encodes `p` in the 48-byte compressed form.
pub fn encode_g1_compressed(p: &G1Affine) -> [u8; G1_COMPRESSED_SIZE] {
    let mut out = [0u8; G1_COMPRESSED_SIZE];
    if p.infinity {
        out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return out;
    }
    fq_to_be(&p.x, &mut out);
    out[0] |= FLAG_COMPRESSED;
    if p.y.lexicographically_largest() {
        out[0] |= FLAG_GREATER;
    }
    out
}

/// Decodes a 48-byte compressed `G1` point.
pub fn decode_g1_compressed(bytes: &[u8; G1_COMPRESSED_SIZE]) -> Result<G1Affine, DecodeError> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return Err(DecodeError::CompressedFlagMismatch);
    }
    let infinity = flags & FLAG_INFINITY != 0;
    let greater = flags & FLAG_GREATER != 0;
    let mut payload = *bytes;
    payload[0] &= !FLAG_MASK;
    if infinity {
        if payload.iter().any(|&b| b != 0) {
            return Err(DecodeError::InvalidEncodingFlags);
        }
        return Ok(G1Affine::infinity());
    }
    let x = fq_from_be(&payload);
    G1Affine::get_point_from_x(x, greater).ok_or(DecodeError::NotOnCurve)
}

/// Encodes `p` in the 96-byte uncompressed form (`x` then `y`, no greater-y
/// flag since both coordinates are present).
pub fn encode_g1_uncompressed(p: &G1Affine) -> [u8; G1_UNCOMPRESSED_SIZE] {
    let mut out = [0u8; G1_UNCOMPRESSED_SIZE];
    if p.infinity {
        out[0] = FLAG_INFINITY;
        return out;
    }
    fq_to_be(&p.x, &mut out[..G1_COMPRESSED_SIZE]);
    fq_to_be(&p.y, &mut out[G1_COMPRESSED_SIZE..]);
    out
}

/// Decodes a 96-byte uncompressed `G1` point.
pub fn decode_g1_uncompressed(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> Result<G1Affine, DecodeError> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED != 0 {
        return Err(DecodeError::CompressedFlagMismatch);
    }
    if flags & FLAG_GREATER != 0 {
        return Err(DecodeError::GreaterFlagOnUncompressed);
    }
    let infinity = flags & FLAG_INFINITY != 0;
    let mut payload = *bytes;
    payload[0] &= !FLAG_MASK;
    if infinity {
        if payload.iter().any(|&b| b != 0) {
            return Err(DecodeError::InvalidEncodingFlags);
        }
        return Ok(G1Affine::infinity());
    }
    let x = fq_from_be(&payload[..G1_COMPRESSED_SIZE]);
    let y = fq_from_be(&payload[G1_COMPRESSED_SIZE..]);
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err(DecodeError::NotOnCurve);
    }
    Ok(p)
}

fn fq2_to_be(x: &Fq2, out: &mut [u8]) {
    // c1 (the `u` coefficient) first, then c0, matching the standard BLS12-381
    // Fq2 serialization order.
    x.c1.to_be_bytes(&mut out[..48]);
    x.c0.to_be_bytes(&mut out[48..]);
}

fn fq2_from_be(bytes: &[u8]) -> Fq2 {
    let c1 = Fq::from_be_bytes(&bytes[..48]);
    let c0 = Fq::from_be_bytes(&bytes[48..]);
    Fq2::new(c0, c1)
}

/// Encodes `p` in the 96-byte compressed form.
pub fn encode_g2_compressed(p: &G2Affine) -> [u8; G2_COMPRESSED_SIZE] {
    let mut out = [0u8; G2_COMPRESSED_SIZE];
    if p.infinity {
        out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return out;
    }
    fq2_to_be(&p.x, &mut out);
    out[0] |= FLAG_COMPRESSED;
    if p.y.lexicographically_largest() {
        out[0] |= FLAG_GREATER;
    }
    out
}

/// Decodes a 96-byte compressed `G2` point.
pub fn decode_g2_compressed(bytes: &[u8; G2_COMPRESSED_SIZE]) -> Result<G2Affine, DecodeError> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED == 0 {
        return Err(DecodeError::CompressedFlagMismatch);
    }
    let infinity = flags & FLAG_INFINITY != 0;
    let greater = flags & FLAG_GREATER != 0;
    let mut payload = *bytes;
    payload[0] &= !FLAG_MASK;
    if infinity {
        if payload.iter().any(|&b| b != 0) {
            return Err(DecodeError::InvalidEncodingFlags);
        }
        return Ok(G2Affine::infinity());
    }
    let x = fq2_from_be(&payload);
    G2Affine::get_point_from_x(x, greater).ok_or(DecodeError::NotOnCurve)
}

/// Encodes `p` in the 192-byte uncompressed form.
pub fn encode_g2_uncompressed(p: &G2Affine) -> [u8; G2_UNCOMPRESSED_SIZE] {
    let mut out = [0u8; G2_UNCOMPRESSED_SIZE];
    if p.infinity {
        out[0] = FLAG_INFINITY;
        return out;
    }
    fq2_to_be(&p.x, &mut out[..G2_COMPRESSED_SIZE]);
    fq2_to_be(&p.y, &mut out[G2_COMPRESSED_SIZE..]);
    out
}

/// Decodes a 192-byte uncompressed `G2` point.
pub fn decode_g2_uncompressed(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> Result<G2Affine, DecodeError> {
    let flags = bytes[0] & FLAG_MASK;
    if flags & FLAG_COMPRESSED != 0 {
        return Err(DecodeError::CompressedFlagMismatch);
    }
    if flags & FLAG_GREATER != 0 {
        return Err(DecodeError::GreaterFlagOnUncompressed);
    }
    let infinity = flags & FLAG_INFINITY != 0;
    let mut payload = *bytes;
    payload[0] &= !FLAG_MASK;
    if infinity {
        if payload.iter().any(|&b| b != 0) {
            return Err(DecodeError::InvalidEncodingFlags);
        }
        return Ok(G2Affine::infinity());
    }
    let x = fq2_from_be(&payload[..G2_COMPRESSED_SIZE]);
    let y = fq2_from_be(&payload[G2_COMPRESSED_SIZE..]);
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err(DecodeError::NotOnCurve);
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveConfig;

    #[test]
    fn g1_compressed_roundtrips() {
        let p = crate::g1::G1Config::generator();
        let bytes = encode_g1_compressed(&p);
        assert_eq!(decode_g1_compressed(&bytes).unwrap(), p);
    }

    #[test]
    fn g1_uncompressed_roundtrips() {
        let p = crate::g1::G1Config::generator();
        let bytes = encode_g1_uncompressed(&p);
        assert_eq!(decode_g1_uncompressed(&bytes).unwrap(), p);
    }

    #[test]
    fn g1_infinity_roundtrips() {
        let p = G1Affine::infinity();
        let bytes = encode_g1_compressed(&p);
        assert_eq!(decode_g1_compressed(&bytes).unwrap(), p);
    }

    #[test]
    fn g2_compressed_roundtrips() {
        let p = crate::g2::G2Config::generator();
        let bytes = encode_g2_compressed(&p);
        assert_eq!(decode_g2_compressed(&bytes).unwrap(), p);
    }

    #[test]
    fn g2_uncompressed_roundtrips() {
        let p = crate::g2::G2Config::generator();
        let bytes = encode_g2_uncompressed(&p);
        assert_eq!(decode_g2_uncompressed(&bytes).unwrap(), p);
    }

    #[test]
    fn rejects_wrong_compressed_flag() {
        let p = crate::g1::G1Config::generator();
        let bytes = encode_g1_uncompressed(&p);
        assert_eq!(
            decode_g1_compressed(&bytes[..G1_COMPRESSED_SIZE].try_into().unwrap()),
            Err(DecodeError::CompressedFlagMismatch)
        );
    }
}
