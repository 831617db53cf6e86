//! Byte (de)serialization for the WKD-IBE types, built on `encoding.rs`'s
//! compressed point formats.
//!
//! Grounded on `original_source/src/wkdibe/marshal.cpp`'s `ParamsMarshalled`/
//! `SecretKeyMarshalled` layouts (fixed header, followed by a `l`-length or
//! free-slot-count-length tail inferred from the buffer length), adapted to
//! `Vec<u8>` output since this crate has no fixed maximum `l` to size a
//! stack buffer against.

extern crate alloc;

use alloc::vec::Vec;

use crate::encoding::{
    self, G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE,
};
use crate::error::{DecodeError, LengthMismatchError};
use crate::fq::Fq;
use crate::fq12::Fq12;
use crate::fq2::Fq2;
use crate::fq6::Fq6;
use crate::g1::Affine as G1Affine;
use crate::g2::Affine as G2Affine;
use crate::pairing;

use super::{Ciphertext, FreeSlot, MasterKey, Params, SecretKey, Signature};

const FQ12_SIZE: usize = 12 * 48;

fn fq12_to_be_bytes(gt: &Fq12) -> [u8; FQ12_SIZE] {
    let mut out = [0u8; FQ12_SIZE];
    let coords = [
        &gt.c0.c0.c0, &gt.c0.c0.c1, &gt.c0.c1.c0, &gt.c0.c1.c1, &gt.c0.c2.c0, &gt.c0.c2.c1,
        &gt.c1.c0.c0, &gt.c1.c0.c1, &gt.c1.c1.c0, &gt.c1.c1.c1, &gt.c1.c2.c0, &gt.c1.c2.c1,
    ];
    for (i, coord) in coords.into_iter().enumerate() {
        coord.to_be_bytes(&mut out[i * 48..(i + 1) * 48]);
    }
    out
}

fn fq12_from_be_bytes(bytes: &[u8]) -> Fq12 {
    let mut limbs = [Fq::ZERO; 12];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = Fq::from_be_bytes(&bytes[i * 48..(i + 1) * 48]);
    }
    let [c000, c001, c010, c011, c020, c021, c100, c101, c110, c111, c120, c121] = limbs;
    Fq12::new(
        Fq6::new(Fq2::new(c000, c001), Fq2::new(c010, c011), Fq2::new(c020, c021)),
        Fq6::new(Fq2::new(c100, c101), Fq2::new(c110, c111), Fq2::new(c120, c121)),
    )
}

const FREE_SLOT_SIZE: usize = 4 + G1_COMPRESSED_SIZE;

fn encode_free_slot(slot: &FreeSlot, out: &mut [u8]) {
    out[..4].copy_from_slice(&slot.idx.to_le_bytes());
    out[4..].copy_from_slice(&encoding::encode_g1_compressed(&slot.hexp));
}

fn decode_free_slot(bytes: &[u8]) -> Result<FreeSlot, DecodeError> {
    let idx = u32::from_le_bytes(bytes[..4].try_into().unwrap());
    let hexp_bytes: [u8; G1_COMPRESSED_SIZE] = bytes[4..].try_into().unwrap();
    let hexp = encoding::decode_g1_compressed(&hexp_bytes)?;
    Ok(FreeSlot { hexp, idx })
}

impl Params {
    /// Encodes `self` as a signature byte, `g`/`g1`/`g2`/`g3` (and `hsig`
    /// when `signatures` is set), then `l` compressed `G1` wildcard
    /// generators. The pairing value is not serialized; it is recomputed
    /// as `e(g2, g1)` on decode.
    pub fn to_bytes(&self) -> Vec<u8> {
        let fixed_len = 1
            + G2_COMPRESSED_SIZE * 2
            + G1_COMPRESSED_SIZE * 2
            + if self.signatures { G1_COMPRESSED_SIZE } else { 0 };
        let mut out = Vec::with_capacity(fixed_len + self.h.len() * G1_COMPRESSED_SIZE);

        out.push(self.signatures as u8);
        out.extend_from_slice(&encoding::encode_g2_compressed(&self.g));
        out.extend_from_slice(&encoding::encode_g2_compressed(&self.g1));
        out.extend_from_slice(&encoding::encode_g1_compressed(&self.g2));
        out.extend_from_slice(&encoding::encode_g1_compressed(&self.g3));
        if self.signatures {
            out.extend_from_slice(&encoding::encode_g1_compressed(&self.hsig));
        }
        for h in &self.h {
            out.extend_from_slice(&encoding::encode_g1_compressed(h));
        }
        out
    }

    /// Decodes `Params` from `bytes`, inferring `l` from the tail length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemeError> {
        let header_min = 1 + G2_COMPRESSED_SIZE * 2 + G1_COMPRESSED_SIZE * 2;
        if bytes.len() < header_min {
            return Err(LengthMismatchError::TooShort { len: bytes.len(), min: header_min }.into());
        }
        let signatures = bytes[0] != 0;
        let mut offset = 1;

        let g = encoding::decode_g2_compressed(
            bytes[offset..offset + G2_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G2_COMPRESSED_SIZE;
        let g1 = encoding::decode_g2_compressed(
            bytes[offset..offset + G2_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G2_COMPRESSED_SIZE;
        let g2 = encoding::decode_g1_compressed(
            bytes[offset..offset + G1_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G1_COMPRESSED_SIZE;
        let g3 = encoding::decode_g1_compressed(
            bytes[offset..offset + G1_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G1_COMPRESSED_SIZE;

        let hsig = if signatures {
            if bytes.len() < offset + G1_COMPRESSED_SIZE {
                return Err(LengthMismatchError::TooShort { len: bytes.len(), min: offset + G1_COMPRESSED_SIZE }.into());
            }
            let hsig = encoding::decode_g1_compressed(
                bytes[offset..offset + G1_COMPRESSED_SIZE].try_into().unwrap(),
            )?;
            offset += G1_COMPRESSED_SIZE;
            hsig
        } else {
            G1Affine::infinity()
        };

        let tail = &bytes[offset..];
        if tail.len() % G1_COMPRESSED_SIZE != 0 {
            return Err(LengthMismatchError::Params { len: bytes.len() }.into());
        }
        let l = tail.len() / G1_COMPRESSED_SIZE;
        let mut h = Vec::with_capacity(l);
        for i in 0..l {
            let chunk = &tail[i * G1_COMPRESSED_SIZE..(i + 1) * G1_COMPRESSED_SIZE];
            h.push(encoding::decode_g1_compressed(chunk.try_into().unwrap())?);
        }

        let pairing_value = pairing::pairing(&g2, &g1);

        Ok(Params { g, g1, g2, g3, pairing: pairing_value, hsig, signatures, h })
    }
}

impl SecretKey {
    /// Encodes `self` as `a0`/`a1`, a signature byte (and `bsig` when set),
    /// then each free slot as `(idx: u32 little-endian, hexp: compressed G1)`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let fixed_len = G1_COMPRESSED_SIZE
            + G2_COMPRESSED_SIZE
            + 1
            + if self.signatures { G1_COMPRESSED_SIZE } else { 0 };
        let mut out = Vec::with_capacity(fixed_len + self.b.len() * FREE_SLOT_SIZE);

        out.extend_from_slice(&encoding::encode_g1_compressed(&self.a0));
        out.extend_from_slice(&encoding::encode_g2_compressed(&self.a1));
        out.push(self.signatures as u8);
        if self.signatures {
            out.extend_from_slice(&encoding::encode_g1_compressed(&self.bsig));
        }
        for slot in &self.b {
            let mut entry = [0u8; FREE_SLOT_SIZE];
            encode_free_slot(slot, &mut entry);
            out.extend_from_slice(&entry);
        }
        out
    }

    /// Decodes a `SecretKey` from `bytes`, inferring the free-slot count
    /// from the tail length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemeError> {
        let header_min = G1_COMPRESSED_SIZE + G2_COMPRESSED_SIZE + 1;
        if bytes.len() < header_min {
            return Err(LengthMismatchError::TooShort { len: bytes.len(), min: header_min }.into());
        }
        let mut offset = 0;
        let a0 = encoding::decode_g1_compressed(
            bytes[offset..offset + G1_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G1_COMPRESSED_SIZE;
        let a1 = encoding::decode_g2_compressed(
            bytes[offset..offset + G2_COMPRESSED_SIZE].try_into().unwrap(),
        )?;
        offset += G2_COMPRESSED_SIZE;
        let signatures = bytes[offset] != 0;
        offset += 1;

        let bsig = if signatures {
            if bytes.len() < offset + G1_COMPRESSED_SIZE {
                return Err(LengthMismatchError::TooShort { len: bytes.len(), min: offset + G1_COMPRESSED_SIZE }.into());
            }
            let bsig = encoding::decode_g1_compressed(
                bytes[offset..offset + G1_COMPRESSED_SIZE].try_into().unwrap(),
            )?;
            offset += G1_COMPRESSED_SIZE;
            bsig
        } else {
            G1Affine::infinity()
        };

        let tail = &bytes[offset..];
        if tail.len() % FREE_SLOT_SIZE != 0 {
            return Err(LengthMismatchError::SecretKey { len: bytes.len() }.into());
        }
        let count = tail.len() / FREE_SLOT_SIZE;
        let mut b = Vec::with_capacity(count);
        for i in 0..count {
            let chunk = &tail[i * FREE_SLOT_SIZE..(i + 1) * FREE_SLOT_SIZE];
            b.push(decode_free_slot(chunk)?);
        }

        Ok(SecretKey { a0, a1, signatures, bsig, b })
    }
}

impl MasterKey {
    /// Fixed-length encoding: just `g2alpha` in compressed form.
    pub const ENCODED_LEN: usize = G1_COMPRESSED_SIZE;

    /// Encodes `self` as a compressed `G1` point.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        encoding::encode_g1_compressed(&self.g2alpha)
    }

    /// Decodes a `MasterKey` from a compressed `G1` point.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        Ok(MasterKey { g2alpha: encoding::decode_g1_compressed(bytes)? })
    }
}

impl Ciphertext {
    /// Fixed-length encoding: `a` (the masked `GT` element, 576 bytes),
    /// then `b`/`c` in compressed form.
    pub const ENCODED_LEN: usize = FQ12_SIZE + G2_COMPRESSED_SIZE + G1_COMPRESSED_SIZE;

    /// Encodes `self` as `a || b || c`.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[..FQ12_SIZE].copy_from_slice(&fq12_to_be_bytes(&self.a));
        out[FQ12_SIZE..FQ12_SIZE + G2_COMPRESSED_SIZE]
            .copy_from_slice(&encoding::encode_g2_compressed(&self.b));
        out[FQ12_SIZE + G2_COMPRESSED_SIZE..]
            .copy_from_slice(&encoding::encode_g1_compressed(&self.c));
        out
    }

    /// Decodes a `Ciphertext` from its fixed-length encoding.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        let a = fq12_from_be_bytes(&bytes[..FQ12_SIZE]);
        let b_bytes: [u8; G2_COMPRESSED_SIZE] =
            bytes[FQ12_SIZE..FQ12_SIZE + G2_COMPRESSED_SIZE].try_into().unwrap();
        let c_bytes: [u8; G1_COMPRESSED_SIZE] =
            bytes[FQ12_SIZE + G2_COMPRESSED_SIZE..].try_into().unwrap();
        let b = encoding::decode_g2_compressed(&b_bytes)?;
        let c = encoding::decode_g1_compressed(&c_bytes)?;
        Ok(Ciphertext { a, b, c })
    }
}

impl Signature {
    /// Fixed-length encoding: `a0` then `a1`, both compressed.
    pub const ENCODED_LEN: usize = G1_COMPRESSED_SIZE + G2_COMPRESSED_SIZE;

    /// Encodes `self` as `a0 || a1`.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[..G1_COMPRESSED_SIZE].copy_from_slice(&encoding::encode_g1_compressed(&self.a0));
        out[G1_COMPRESSED_SIZE..].copy_from_slice(&encoding::encode_g2_compressed(&self.a1));
        out
    }

    /// Decodes a `Signature` from its fixed-length encoding.
    pub fn from_bytes(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, DecodeError> {
        let a0_bytes: [u8; G1_COMPRESSED_SIZE] = bytes[..G1_COMPRESSED_SIZE].try_into().unwrap();
        let a1_bytes: [u8; G2_COMPRESSED_SIZE] = bytes[G1_COMPRESSED_SIZE..].try_into().unwrap();
        let a0 = encoding::decode_g1_compressed(&a0_bytes)?;
        let a1 = encoding::decode_g2_compressed(&a1_bytes)?;
        Ok(Signature { a0, a1 })
    }
}

use crate::error::SchemeError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CryptoRng, RngCore};

    struct TestRng(blake3::OutputReader);

    impl TestRng {
        fn seeded(seed: u64) -> Self {
            let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::wkdibe::marshal::test_rng");
            hasher.update(&seed.to_le_bytes());
            TestRng(hasher.finalize_xof())
        }
    }

    impl RngCore for TestRng {
        fn next_u32(&mut self) -> u32 {
            let mut bytes = [0u8; 4];
            self.0.fill(&mut bytes);
            u32::from_le_bytes(bytes)
        }
        fn next_u64(&mut self) -> u64 {
            let mut bytes = [0u8; 8];
            self.0.fill(&mut bytes);
            u64::from_le_bytes(bytes)
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill(dest);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.0.fill(dest);
            Ok(())
        }
    }

    impl CryptoRng for TestRng {}

    #[test]
    fn params_roundtrip_through_bytes() {
        let mut rng = TestRng::seeded(1);
        let (params, _msk) = super::super::setup(3, true, &mut rng);
        let bytes = params.to_bytes();
        let decoded = Params::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.g, params.g);
        assert_eq!(decoded.g1, params.g1);
        assert_eq!(decoded.g2, params.g2);
        assert_eq!(decoded.g3, params.g3);
        assert_eq!(decoded.hsig, params.hsig);
        assert_eq!(decoded.h, params.h);
        assert_eq!(decoded.pairing, params.pairing);
    }

    #[test]
    fn secret_key_roundtrip_through_bytes() {
        let mut rng = TestRng::seeded(2);
        let (params, msk) = super::super::setup(3, false, &mut rng);
        let attrs = [super::super::Attribute {
            id: crate::fr::random(&mut rng),
            idx: 0,
            omit_from_keys: false,
        }];
        let list = super::super::AttributeList::new(&attrs, false);
        let sk = super::super::keygen(&params, &msk, &list, &mut rng);
        let bytes = sk.to_bytes();
        let decoded = SecretKey::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.a0, sk.a0);
        assert_eq!(decoded.a1, sk.a1);
        assert_eq!(decoded.b, sk.b);
    }

    #[test]
    fn ciphertext_roundtrips_through_bytes() {
        let mut rng = TestRng::seeded(3);
        let (params, _msk) = super::super::setup(2, false, &mut rng);
        let attrs: [super::super::Attribute; 0] = [];
        let list = super::super::AttributeList::new(&attrs, false);
        let message = Fq12::random(&mut rng).square();
        let ciphertext = super::super::encrypt(&message, &params, &list, &mut rng);
        let bytes = ciphertext.to_bytes();
        let decoded = Ciphertext::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, ciphertext);
    }
}
