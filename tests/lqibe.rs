//! End-to-end LQIBE checks exercised through the crate's public API.

use bls12_381_pairing::lqibe::{self, Ciphertext, Id, Params, SecretKey};

mod common;
use common::TestRng;

#[test]
fn two_identities_derive_independent_keys() {
    let mut rng = TestRng::seeded(1);
    let (params, msk) = lqibe::setup(&mut rng);

    let alice = Id::from_bytes(b"alice@example.com");
    let bob = Id::from_bytes(b"bob@example.com");
    assert_ne!(alice, bob);

    let alice_sk = lqibe::keygen(&msk, &alice);
    let bob_sk = lqibe::keygen(&msk, &bob);
    assert_ne!(alice_sk, bob_sk);

    let (ciphertext, key) = lqibe::encrypt(&params, &alice, 32, &mut rng);
    let recovered = lqibe::decrypt(&ciphertext, &alice_sk, &alice, 32);
    assert_eq!(key, recovered);

    let wrong = lqibe::decrypt(&ciphertext, &bob_sk, &alice, 32);
    assert_ne!(key, wrong);
}

#[test]
fn params_and_keys_survive_a_byte_roundtrip() {
    let mut rng = TestRng::seeded(2);
    let (params, msk) = lqibe::setup(&mut rng);
    let id = Id::from_bytes(b"carol@example.com");
    let sk = lqibe::keygen(&msk, &id);

    let params_bytes = params.to_bytes();
    let params_back = Params::from_bytes(&params_bytes).unwrap();
    assert_eq!(params_back, params);

    let sk_bytes = sk.to_bytes();
    let sk_back = SecretKey::from_bytes(&sk_bytes).unwrap();
    assert_eq!(sk_back, sk);

    let (ciphertext, key) = lqibe::encrypt(&params, &id, 24, &mut rng);
    let ciphertext_bytes = ciphertext.to_bytes();
    let ciphertext_back = Ciphertext::from_bytes(&ciphertext_bytes).unwrap();
    assert_eq!(ciphertext_back, ciphertext);

    let recovered = lqibe::decrypt(&ciphertext_back, &sk_back, &id, 24);
    assert_eq!(recovered, key);
}
