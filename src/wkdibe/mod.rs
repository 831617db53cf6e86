//! WKD-IBE: wildcarded key-delegation identity-based encryption, plus its
//! companion signature scheme. Identities are wildcard patterns over `l`
//! indexed slots; a key for a pattern can be further *qualified* (delegated)
//! to any more specific pattern without the master secret.
//!
//! Grounded throughout on `original_source/src/wkdibe/api.cpp`, which this
//! module follows function-for-function (`setup`, `keygen`, `qualify_key`,
//! the `nondelegable_*` fixed-pattern variants, `adjust_nondelegable`,
//! `precompute`/`adjust_precomputed`/`resample_key`, `encrypt`/`decrypt`,
//! `sign`/`verify`). Two simplifications from the reference's C++: slot
//! lookups use `[T]::binary_search_by_key` against sorted attribute/free-slot
//! lists instead of replicating its hand-rolled two-pointer merge state
//! machines (same result, since both assume strictly sorted input), and `Fr`
//! subtraction is already reduced mod the group order, so the explicit
//! `+ group_order` rewrapping the original performs by hand is unnecessary
//! here.

extern crate alloc;

/// Wildcard attribute lists (`Attribute`/`AttributeList`).
pub mod attrs;
/// Byte (de)serialization for this module's types.
pub mod marshal;

use alloc::vec::Vec;

use crate::curve::CurveConfig;
use crate::fq12::Fq12;
use crate::fr::Fr;
use crate::g1::{self, Affine as G1Affine, G1Config};
use crate::g2::{self, Affine as G2Affine, G2Config};
use crate::pairing;
use crate::rng::SecureRng;

pub use attrs::{Attribute, AttributeList};

/// Public parameters for `l` wildcard slots.
#[derive(Clone)]
pub struct Params {
    /// A random generator of `G2`.
    pub g: G2Affine,
    /// `g^alpha`.
    pub g1: G2Affine,
    /// A random generator of `G1`.
    pub g2: G1Affine,
    /// A second, independent random generator of `G1`.
    pub g3: G1Affine,
    /// `e(g2, g1)`, cached to avoid recomputing it on every decryption.
    pub pairing: Fq12,
    /// The signature scheme's extra generator; only meaningful when
    /// `signatures` is set.
    pub hsig: G1Affine,
    /// Whether this deployment supports the signature scheme.
    pub signatures: bool,
    /// One random `G1` generator per wildcard slot.
    pub h: Vec<G1Affine>,
}

/// The master secret `alpha`, held as `g2^alpha`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MasterKey {
    /// `g2^alpha`.
    pub g2alpha: G1Affine,
}

/// One still-free (unqualified) wildcard slot retained in a secret key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FreeSlot {
    /// The slot's blinded generator.
    pub hexp: G1Affine,
    /// The wildcard slot index this entry can still be qualified for.
    pub idx: u32,
}

/// A secret key for some wildcard pattern.
#[derive(Clone)]
pub struct SecretKey {
    /// The key's core share.
    pub a0: G1Affine,
    /// The key's `G2` share.
    pub a1: G2Affine,
    /// Whether this key can sign.
    pub signatures: bool,
    /// The signature share, meaningful only when `signatures` is set.
    pub bsig: G1Affine,
    /// The key's still-free wildcard slots, sorted by `idx`.
    pub b: Vec<FreeSlot>,
}

/// A ciphertext encrypted under some wildcard pattern.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ciphertext {
    /// The masked message, in `GT`.
    pub a: Fq12,
    /// `g^s`.
    pub b: G2Affine,
    /// The pattern-bound `G1` share, `prodexp^s`.
    pub c: G1Affine,
}

/// A signature over a message in `Fr`, for some wildcard pattern.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Signature {
    /// The signature's `G1` share.
    pub a0: G1Affine,
    /// The signature's `G2` share.
    pub a1: G2Affine,
}

/// A pattern-bound accumulator that lets `encrypt`/`sign` skip recomputing
/// the per-attribute product when the same pattern is reused.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Precomputed {
    /// `g3 * prod_i h[attr_i.idx]^attr_i.id`.
    pub prodexp: G1Affine,
}

fn random_generator_g1(rng: &mut impl SecureRng) -> G1Affine {
    let k = crate::fr::random(rng);
    g1::multiply_glv(&G1Config::generator(), &k).to_affine()
}

fn random_generator_g2(rng: &mut impl SecureRng) -> G2Affine {
    let k = crate::fr::random(rng);
    g2::multiply_gls(&G2Config::generator(), &k).to_affine()
}

/// Generates fresh public parameters supporting `l` wildcard slots.
pub fn setup(l: usize, signatures: bool, rng: &mut impl SecureRng) -> (Params, MasterKey) {
    let alpha = crate::fr::random(rng);
    let g = random_generator_g2(rng);
    let g1_param = g2::multiply_gls(&g, &alpha).to_affine();
    let g2_param = random_generator_g1(rng);
    let g2alpha = g1::multiply_glv(&g2_param, &alpha).to_affine();
    let g3 = random_generator_g1(rng);
    let pairing_value = pairing::pairing(&g2_param, &g1_param);
    let hsig = if signatures {
        random_generator_g1(rng)
    } else {
        G1Affine::infinity()
    };
    let h = (0..l).map(|_| random_generator_g1(rng)).collect();

    (
        Params {
            g,
            g1: g1_param,
            g2: g2_param,
            g3,
            pairing: pairing_value,
            hsig,
            signatures,
            h,
        },
        MasterKey { g2alpha },
    )
}

/// Derives a fresh, freely delegable secret key for `attrs` under `msk`.
pub fn keygen(
    params: &Params,
    msk: &MasterKey,
    attrs: &AttributeList,
    rng: &mut impl SecureRng,
) -> SecretKey {
    let r = crate::fr::random(rng);
    let mut a0 = g1::Projective::from_affine(&params.g3);
    let mut b = Vec::new();
    for i in 0..params.h.len() as u32 {
        match attrs.get(i) {
            Some(attr) if !attr.omit_from_keys => {
                a0 = a0.add(&g1::multiply_glv(&params.h[i as usize], &attr.id));
            }
            Some(_) => {}
            None if !attrs.omit_all_from_keys_unless_present => {
                let hexp = g1::multiply_glv(&params.h[i as usize], &r).to_affine();
                b.push(FreeSlot { hexp, idx: i });
            }
            None => {}
        }
    }
    let a0 = g1::multiply_glv(&a0.to_affine(), &r).add_mixed(&msk.g2alpha).to_affine();
    let a1 = g2::multiply_gls(&params.g, &r).to_affine();
    let bsig = if params.signatures {
        g1::multiply_glv(&params.hsig, &r).to_affine()
    } else {
        G1Affine::infinity()
    };

    SecretKey {
        a0,
        a1,
        signatures: params.signatures,
        bsig,
        b,
    }
}

/// Delegates `sk` to the more specific pattern `attrs`, re-randomizing the
/// result so it is indistinguishable from a freshly issued key.
pub fn qualify_key(
    params: &Params,
    sk: &SecretKey,
    attrs: &AttributeList,
    rng: &mut impl SecureRng,
) -> SecretKey {
    let t = crate::fr::random(rng);
    let mut product = g1::Projective::from_affine(&params.g3);
    let mut a0 = g1::Projective::from_affine(&sk.a0);
    let mut b = Vec::new();

    for i in 0..params.h.len() as u32 {
        let free_slot = sk.b.iter().find(|slot| slot.idx == i);
        match attrs.get(i) {
            Some(attr) => {
                if !attr.omit_from_keys {
                    product = product.add(&g1::multiply_glv(&params.h[i as usize], &attr.id));
                    if let Some(slot) = free_slot {
                        a0 = a0.add(&g1::multiply_glv(&slot.hexp, &attr.id));
                    }
                }
            }
            None => {
                if let Some(slot) = free_slot {
                    if !attrs.omit_all_from_keys_unless_present {
                        let hexp = g1::multiply_glv(&params.h[i as usize], &t)
                            .add_mixed(&slot.hexp)
                            .to_affine();
                        b.push(FreeSlot { hexp, idx: i });
                    }
                }
            }
        }
    }

    let product = g1::multiply_glv(&product.to_affine(), &t);
    let a0 = a0.add(&product).to_affine();
    let a1 = g2::multiply_gls(&params.g, &t).add_mixed(&sk.a1).to_affine();
    let bsig = if sk.signatures {
        g1::multiply_glv(&params.hsig, &t).add_mixed(&sk.bsig).to_affine()
    } else {
        G1Affine::infinity()
    };

    SecretKey {
        a0,
        a1,
        signatures: sk.signatures,
        bsig,
        b,
    }
}

/// Derives a key bound to the fixed pattern `attrs`, with no re-randomization
/// exponent: slots present and not omitted are folded directly into `a0`,
/// every other slot is kept as an unblinded free `h[idx]`. Cheaper than
/// [`keygen`] but its free slots are not indistinguishable from a qualified
/// key's, so it should only be used when that key will never be qualified
/// and handed to a third party (hence "nondelegable").
pub fn nondelegable_keygen(params: &Params, msk: &MasterKey, attrs: &AttributeList) -> SecretKey {
    let mut a0 = g1::Projective::from_affine(&params.g3);
    let mut b = Vec::new();
    for i in 0..params.h.len() as u32 {
        match attrs.get(i) {
            Some(attr) if !attr.omit_from_keys => {
                a0 = a0.add(&g1::multiply_glv(&params.h[i as usize], &attr.id));
            }
            _ => {
                if !attrs.omit_all_from_keys_unless_present {
                    b.push(FreeSlot {
                        hexp: params.h[i as usize],
                        idx: i,
                    });
                }
            }
        }
    }
    let a0 = a0.add_mixed(&msk.g2alpha).to_affine();
    let bsig = if params.signatures { params.hsig } else { G1Affine::infinity() };

    SecretKey {
        a0,
        a1: params.g,
        signatures: params.signatures,
        bsig,
        b,
    }
}

/// The `nondelegable_keygen` analogue of [`qualify_key`]: no re-randomization,
/// so the result remains a nondelegable key.
pub fn nondelegable_qualify_key(sk: &SecretKey, attrs: &AttributeList) -> SecretKey {
    let mut a0 = g1::Projective::from_affine(&sk.a0);
    let mut b = Vec::new();
    for slot in sk.b.iter() {
        match attrs.get(slot.idx) {
            Some(attr) if !attr.omit_from_keys => {
                a0 = a0.add(&g1::multiply_glv(&slot.hexp, &attr.id));
            }
            Some(_) => {}
            None => {
                if !attrs.omit_all_from_keys_unless_present {
                    b.push(*slot);
                }
            }
        }
    }
    SecretKey {
        a0: a0.to_affine(),
        a1: sk.a1,
        signatures: sk.signatures,
        bsig: sk.bsig,
        b,
    }
}

/// Re-binds a nondelegable key's still-free slots from pattern `from` to
/// pattern `to`, without the master secret. Mirrors `adjust_nondelegable`,
/// simplified to look each slot's `from`/`to` binding up directly rather
/// than replicate the reference's omitted-entry skip-scan (a slot bound in
/// `from`/`to` always participates the same way regardless of why an entry
/// might otherwise have been marked `omit_from_keys`, so no such entries can
/// legitimately reach a still-free slot here).
pub fn adjust_nondelegable(parent: &SecretKey, from: &AttributeList, to: &AttributeList) -> SecretKey {
    let mut a0 = g1::Projective::from_affine(&parent.a0);
    let mut b = Vec::new();
    for slot in parent.b.iter() {
        let from_attr = from.get(slot.idx);
        let to_attr = to.get(slot.idx);
        match (from_attr, to_attr) {
            (Some(f), Some(t)) => {
                if f.id != t.id {
                    let diff = t.id.sub(&f.id);
                    a0 = a0.add(&g1::multiply_glv(&slot.hexp, &diff));
                }
            }
            (Some(f), None) => {
                let diff = Fr::ZERO.sub(&f.id);
                a0 = a0.add(&g1::multiply_glv(&slot.hexp, &diff));
            }
            (None, Some(t)) => {
                a0 = a0.add(&g1::multiply_glv(&slot.hexp, &t.id));
            }
            (None, None) => {}
        }
        if to_attr.is_none() {
            b.push(*slot);
        }
    }
    SecretKey {
        a0: a0.to_affine(),
        a1: parent.a1,
        signatures: parent.signatures,
        bsig: parent.bsig,
        b,
    }
}

/// Computes the per-pattern accumulator `encrypt`/`sign` need, so repeated
/// operations against the same pattern avoid recomputing it.
pub fn precompute(params: &Params, attrs: &AttributeList) -> Precomputed {
    let mut prodexp = g1::Projective::from_affine(&params.g3);
    for attr in attrs.attrs {
        prodexp = prodexp.add(&g1::multiply_glv(&params.h[attr.idx as usize], &attr.id));
    }
    Precomputed {
        prodexp: prodexp.to_affine(),
    }
}

/// Adjusts a precomputed accumulator from pattern `from` to pattern `to`,
/// merge-walking the two sorted attribute lists.
pub fn adjust_precomputed(
    precomputed: &Precomputed,
    params: &Params,
    from: &AttributeList,
    to: &AttributeList,
) -> Precomputed {
    let mut prodexp = g1::Projective::from_affine(&precomputed.prodexp);
    let mut i = 0usize;
    let mut j = 0usize;
    while i < from.attrs.len() && j < to.attrs.len() {
        let fa = from.attrs[i];
        let ta = to.attrs[j];
        if fa.idx == ta.idx {
            if fa.id != ta.id {
                let diff = ta.id.sub(&fa.id);
                prodexp = prodexp.add(&g1::multiply_glv(&params.h[fa.idx as usize], &diff));
            }
            i += 1;
            j += 1;
        } else if fa.idx < ta.idx {
            let diff = Fr::ZERO.sub(&fa.id);
            prodexp = prodexp.add(&g1::multiply_glv(&params.h[fa.idx as usize], &diff));
            i += 1;
        } else {
            prodexp = prodexp.add(&g1::multiply_glv(&params.h[ta.idx as usize], &ta.id));
            j += 1;
        }
    }
    while i < from.attrs.len() {
        let fa = from.attrs[i];
        let diff = Fr::ZERO.sub(&fa.id);
        prodexp = prodexp.add(&g1::multiply_glv(&params.h[fa.idx as usize], &diff));
        i += 1;
    }
    while j < to.attrs.len() {
        let ta = to.attrs[j];
        prodexp = prodexp.add(&g1::multiply_glv(&params.h[ta.idx as usize], &ta.id));
        j += 1;
    }
    Precomputed {
        prodexp: prodexp.to_affine(),
    }
}

/// Re-randomizes `sk`, optionally dropping its ability to be further
/// qualified (`support_further_qualification = false` discards its free
/// slots, producing a smaller key good only for decryption/signing).
pub fn resample_key(
    params: &Params,
    precomputed: &Precomputed,
    sk: &SecretKey,
    support_further_qualification: bool,
    rng: &mut impl SecureRng,
) -> SecretKey {
    let t = crate::fr::random(rng);
    let a0 = g1::Projective::from_affine(&sk.a0)
        .add(&g1::multiply_glv(&precomputed.prodexp, &t))
        .to_affine();
    let a1 = g2::Projective::from_affine(&sk.a1)
        .add(&g2::multiply_gls(&params.g, &t))
        .to_affine();
    let bsig = if sk.signatures {
        g1::Projective::from_affine(&sk.bsig)
            .add(&g1::multiply_glv(&params.hsig, &t))
            .to_affine()
    } else {
        G1Affine::infinity()
    };
    let b = if support_further_qualification {
        sk.b
            .iter()
            .map(|slot| FreeSlot {
                idx: slot.idx,
                hexp: g1::Projective::from_affine(&slot.hexp)
                    .add(&g1::multiply_glv(&params.h[slot.idx as usize], &t))
                    .to_affine(),
            })
            .collect()
    } else {
        Vec::new()
    };

    SecretKey {
        a0,
        a1,
        signatures: sk.signatures,
        bsig,
        b,
    }
}

/// Encrypts `message` (a `GT` element) under the pattern `attrs`.
pub fn encrypt(
    message: &Fq12,
    params: &Params,
    attrs: &AttributeList,
    rng: &mut impl SecureRng,
) -> Ciphertext {
    let precomputed = precompute(params, attrs);
    encrypt_precomputed(message, params, &precomputed, rng)
}

/// Encrypts `message` using an already-computed [`Precomputed`] accumulator.
pub fn encrypt_precomputed(
    message: &Fq12,
    params: &Params,
    precomputed: &Precomputed,
    rng: &mut impl SecureRng,
) -> Ciphertext {
    let s = crate::fr::random(rng);
    let exponent = s.into_canonical().0;
    let a = params.pairing.pow(&exponent).mul(message);
    let b = g2::multiply_gls(&params.g, &s).to_affine();
    let c = g1::multiply_glv(&precomputed.prodexp, &s).to_affine();
    Ciphertext { a, b, c }
}

/// Decrypts `ciphertext` using a secret key qualified for its pattern.
pub fn decrypt(ciphertext: &Ciphertext, sk: &SecretKey) -> Fq12 {
    let numerator = pairing::pairing(&ciphertext.c, &sk.a1);
    let denominator = pairing::pairing(&sk.a0, &ciphertext.b).inverse();
    numerator.mul(&denominator).mul(&ciphertext.a)
}

/// Decrypts `ciphertext` directly with the master key, bypassing any
/// identity/pattern qualification.
pub fn decrypt_master(ciphertext: &Ciphertext, msk: &MasterKey) -> Fq12 {
    let denominator = pairing::pairing(&msk.g2alpha, &ciphertext.b).inverse();
    denominator.mul(&ciphertext.a)
}

/// Signs `message` (an element of `Fr`) with `sk`, optionally binding
/// further free slots via `attrs`.
pub fn sign(
    params: &Params,
    sk: &SecretKey,
    attrs: &AttributeList,
    message: &Fr,
    rng: &mut impl SecureRng,
) -> Signature {
    let precomputed = precompute(params, attrs);
    sign_precomputed(params, sk, Some(attrs), &precomputed, message, rng)
}

/// Signs `message` using an already-computed [`Precomputed`] accumulator.
/// `attrs`, when present, binds any of `sk`'s remaining free slots that
/// match one of its entries into the signature.
pub fn sign_precomputed(
    params: &Params,
    sk: &SecretKey,
    attrs: Option<&AttributeList>,
    precomputed: &Precomputed,
    message: &Fr,
    rng: &mut impl SecureRng,
) -> Signature {
    let s = crate::fr::random(rng);

    let mut a0 = g1::multiply_glv(&sk.bsig, message);
    let mut prodexp = g1::multiply_glv(&params.hsig, message);
    a0 = a0.add(&g1::Projective::from_affine(&sk.a0));
    prodexp = prodexp.add(&g1::Projective::from_affine(&precomputed.prodexp));

    let mut a1 = g2::multiply_gls(&params.g, &s);
    let prodexp = g1::multiply_glv(&prodexp.to_affine(), &s);
    a0 = a0.add(&prodexp);
    a1 = a1.add(&g2::Projective::from_affine(&sk.a1));

    if let Some(attrs) = attrs {
        for slot in sk.b.iter() {
            if let Some(attr) = attrs.get(slot.idx) {
                a0 = a0.add(&g1::multiply_glv(&slot.hexp, &attr.id));
            }
        }
    }

    Signature {
        a0: a0.to_affine(),
        a1: a1.to_affine(),
    }
}

/// Verifies `signature` over `message` under the pattern `attrs`.
pub fn verify(params: &Params, attrs: &AttributeList, signature: &Signature, message: &Fr) -> bool {
    let precomputed = precompute(params, attrs);
    verify_precomputed(params, &precomputed, signature, message)
}

/// Verifies `signature` using an already-computed [`Precomputed`]
/// accumulator.
pub fn verify_precomputed(
    params: &Params,
    precomputed: &Precomputed,
    signature: &Signature,
    message: &Fr,
) -> bool {
    let prodexp = g1::multiply_glv(&params.hsig, message)
        .add(&g1::Projective::from_affine(&precomputed.prodexp))
        .to_affine();
    let ratio = pairing::pairing(&signature.a0, &params.g);
    let denominator = pairing::pairing(&prodexp, &signature.a1).inverse();
    ratio.mul(&denominator) == params.pairing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CryptoRng, RngCore};

    struct TestRng(blake3::OutputReader);

    impl TestRng {
        fn seeded(seed: u64) -> Self {
            let mut hasher = blake3::Hasher::new_derive_key("bls12_381_pairing::wkdibe::test_rng");
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

    fn random_gt(rng: &mut impl SecureRng) -> Fq12 {
        let base = Fq12::random(rng);
        base.square()
    }

    #[test]
    fn full_key_encrypt_then_decrypt_recovers_the_message() {
        let mut rng = TestRng::seeded(1);
        let (params, msk) = setup(4, false, &mut rng);
        let attrs = [
            Attribute { id: crate::fr::random(&mut rng), idx: 0, omit_from_keys: false },
            Attribute { id: crate::fr::random(&mut rng), idx: 2, omit_from_keys: false },
        ];
        let list = AttributeList::new(&attrs, false);
        let sk = keygen(&params, &msk, &list, &mut rng);

        let message = random_gt(&mut rng);
        let ciphertext = encrypt(&message, &params, &list, &mut rng);
        let recovered = decrypt(&ciphertext, &sk);
        assert_eq!(recovered, message);
    }

    #[test]
    fn qualified_key_decrypts_a_more_specific_pattern() {
        let mut rng = TestRng::seeded(2);
        let (params, msk) = setup(4, false, &mut rng);
        let partial = [Attribute { id: crate::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
        let partial_list = AttributeList::new(&partial, false);
        let sk = keygen(&params, &msk, &partial_list, &mut rng);

        let full = [
            partial[0],
            Attribute { id: crate::fr::random(&mut rng), idx: 1, omit_from_keys: false },
        ];
        let full_list = AttributeList::new(&full, false);
        let qualified = qualify_key(&params, &sk, &full_list, &mut rng);

        let message = random_gt(&mut rng);
        let ciphertext = encrypt(&message, &params, &full_list, &mut rng);
        assert_eq!(decrypt(&ciphertext, &qualified), message);
    }

    #[test]
    fn master_key_decrypts_any_ciphertext() {
        let mut rng = TestRng::seeded(3);
        let (params, msk) = setup(2, false, &mut rng);
        let attrs: [Attribute; 0] = [];
        let list = AttributeList::new(&attrs, false);
        let message = random_gt(&mut rng);
        let ciphertext = encrypt(&message, &params, &list, &mut rng);
        assert_eq!(decrypt_master(&ciphertext, &msk), message);
    }

    #[test]
    fn sign_then_verify_succeeds_for_the_issuing_pattern() {
        let mut rng = TestRng::seeded(4);
        let (params, msk) = setup(3, true, &mut rng);
        let attrs = [Attribute { id: crate::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
        let list = AttributeList::new(&attrs, false);
        let sk = keygen(&params, &msk, &list, &mut rng);

        let message = crate::fr::random(&mut rng);
        let signature = sign(&params, &sk, &list, &message, &mut rng);
        assert!(verify(&params, &list, &signature, &message));
    }

    #[test]
    fn verify_rejects_a_tampered_message() {
        let mut rng = TestRng::seeded(5);
        let (params, msk) = setup(3, true, &mut rng);
        let attrs = [Attribute { id: crate::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
        let list = AttributeList::new(&attrs, false);
        let sk = keygen(&params, &msk, &list, &mut rng);

        let message = crate::fr::random(&mut rng);
        let other_message = crate::fr::random(&mut rng);
        let signature = sign(&params, &sk, &list, &message, &mut rng);
        assert!(!verify(&params, &list, &signature, &other_message));
    }
}
