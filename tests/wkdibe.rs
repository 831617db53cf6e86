//! End-to-end delegation, encryption, and signature checks for WKD-IBE,
//! exercised purely through the crate's public API.

use bls12_381_pairing::wkdibe::{
    self, Attribute, AttributeList, Ciphertext, Params, SecretKey, Signature,
};
use bls12_381_pairing::Fq12;

mod common;
use common::TestRng;

fn random_gt(rng: &mut TestRng) -> Fq12 {
    Fq12::random(rng).square()
}

#[test]
fn a_key_qualified_twice_still_decrypts_the_fully_specified_pattern() {
    let mut rng = TestRng::seeded(1);
    let (params, msk) = wkdibe::setup(4, false, &mut rng);

    let root = AttributeList::new(&[], false);
    let root_sk = wkdibe::keygen(&params, &msk, &root, &mut rng);

    let level1 = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let level1_list = AttributeList::new(&level1, false);
    let level1_sk = wkdibe::qualify_key(&params, &root_sk, &level1_list, &mut rng);

    let level2 = [
        level1[0],
        Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 2, omit_from_keys: false },
    ];
    let level2_list = AttributeList::new(&level2, false);
    let level2_sk = wkdibe::qualify_key(&params, &level1_sk, &level2_list, &mut rng);

    let message = random_gt(&mut rng);
    let ciphertext = wkdibe::encrypt(&message, &params, &level2_list, &mut rng);
    assert_eq!(wkdibe::decrypt(&ciphertext, &level2_sk), message);
}

#[test]
fn nondelegable_keys_can_be_rebound_across_patterns_via_adjust() {
    let mut rng = TestRng::seeded(2);
    let (params, msk) = wkdibe::setup(2, false, &mut rng);

    let from = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let from_list = AttributeList::new(&from, false);
    let sk = wkdibe::nondelegable_keygen(&params, &msk, &from_list);

    let to = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let to_list = AttributeList::new(&to, false);
    let adjusted = wkdibe::adjust_nondelegable(&sk, &from_list, &to_list);

    let message = random_gt(&mut rng);
    let ciphertext = wkdibe::encrypt(&message, &params, &to_list, &mut rng);
    assert_eq!(wkdibe::decrypt(&ciphertext, &adjusted), message);
}

#[test]
fn precomputed_accumulator_adjustment_matches_direct_precompute() {
    let mut rng = TestRng::seeded(3);
    let (params, _msk) = wkdibe::setup(3, false, &mut rng);

    let from = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let from_list = AttributeList::new(&from, false);
    let to = [
        Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false },
        Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 1, omit_from_keys: false },
    ];
    let to_list = AttributeList::new(&to, false);

    let from_precomputed = wkdibe::precompute(&params, &from_list);
    let adjusted = wkdibe::adjust_precomputed(&from_precomputed, &params, &from_list, &to_list);
    let direct = wkdibe::precompute(&params, &to_list);
    assert_eq!(adjusted, direct);
}

#[test]
fn resampled_key_without_delegation_support_still_decrypts() {
    let mut rng = TestRng::seeded(4);
    let (params, msk) = wkdibe::setup(2, false, &mut rng);
    let attrs = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let list = AttributeList::new(&attrs, false);
    let sk = wkdibe::keygen(&params, &msk, &list, &mut rng);

    let precomputed = wkdibe::precompute(&params, &list);
    let resampled = wkdibe::resample_key(&params, &precomputed, &sk, false, &mut rng);
    assert!(resampled.b.is_empty());

    let message = random_gt(&mut rng);
    let ciphertext = wkdibe::encrypt(&message, &params, &list, &mut rng);
    assert_eq!(wkdibe::decrypt(&ciphertext, &resampled), message);
}

#[test]
fn signatures_verify_under_the_issuing_pattern_and_reject_other_patterns() {
    let mut rng = TestRng::seeded(5);
    let (params, msk) = wkdibe::setup(2, true, &mut rng);
    let attrs = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let list = AttributeList::new(&attrs, false);
    let sk = wkdibe::keygen(&params, &msk, &list, &mut rng);

    let message = bls12_381_pairing::fr::random(&mut rng);
    let signature = wkdibe::sign(&params, &sk, &list, &message, &mut rng);
    assert!(wkdibe::verify(&params, &list, &signature, &message));

    let other_attrs = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 0, omit_from_keys: false }];
    let other_list = AttributeList::new(&other_attrs, false);
    assert!(!wkdibe::verify(&params, &other_list, &signature, &message));
}

#[test]
fn params_secret_key_ciphertext_and_signature_survive_byte_roundtrips() {
    let mut rng = TestRng::seeded(6);
    let (params, msk) = wkdibe::setup(3, true, &mut rng);
    let attrs = [Attribute { id: bls12_381_pairing::fr::random(&mut rng), idx: 1, omit_from_keys: false }];
    let list = AttributeList::new(&attrs, false);
    let sk = wkdibe::keygen(&params, &msk, &list, &mut rng);

    let params_bytes = params.to_bytes();
    let params_back = Params::from_bytes(&params_bytes).unwrap();
    assert_eq!(params_back.h, params.h);

    let sk_bytes = sk.to_bytes();
    let sk_back = SecretKey::from_bytes(&sk_bytes).unwrap();
    assert_eq!(sk_back.a0, sk.a0);
    assert_eq!(sk_back.a1, sk.a1);

    let message = random_gt(&mut rng);
    let ciphertext = wkdibe::encrypt(&message, &params, &list, &mut rng);
    let ciphertext_bytes = ciphertext.to_bytes();
    let ciphertext_back = Ciphertext::from_bytes(&ciphertext_bytes).unwrap();
    assert_eq!(ciphertext_back, ciphertext);

    let sig_message = bls12_381_pairing::fr::random(&mut rng);
    let signature = wkdibe::sign(&params, &sk, &list, &sig_message, &mut rng);
    let signature_bytes = signature.to_bytes();
    let signature_back = Signature::from_bytes(&signature_bytes).unwrap();
    assert_eq!(signature_back, signature);
}
