//! End-to-end tests for the IND-CCA KEM, exercised only through
//! `kyber_toy`'s public API.

use kyber_toy::kem::{DecapsulationKey, Kem};
use kyber_toy::params::Params;
use rand::rngs::OsRng;

#[test]
fn alice_and_bob_agree_on_every_parameter_set() {
    for params in [Params::KYBER512, Params::KYBER768, Params::KYBER1024] {
        println!("\n--- Running the test: {} ---", params.name);
        let kem = Kem::new(params);
        let (ek, dk) = kem.keygen(&mut OsRng).unwrap();
        println!("  generated keys (ek: {} bytes, dk: {} bytes)", ek.len(), dk.len());

        let (ct, ss_bob) = kem.encapsulate(&ek, &mut OsRng).unwrap();
        println!("  encapsulated secret (K)  : {}", hex::encode(ss_bob.0));
        println!("  ciphertext generated (c) : {} bytes", ct.len());

        let ss_alice = kem.decapsulate(&dk, &ct).unwrap();
        println!("  decapsulated secret (K') : {}", hex::encode(ss_alice.0));

        assert_eq!(ss_bob, ss_alice, "disagreement for {}", params.name);
    }
}

#[test]
fn encapsulation_key_size_matches_params() {
    for params in [Params::KYBER512, Params::KYBER768, Params::KYBER1024] {
        let kem = Kem::new(params);
        let (ek, dk) = kem.keygen(&mut OsRng).unwrap();
        assert_eq!(ek.len(), params.pke_pk_len());
        assert_eq!(dk.len(), params.kem_dk_len());
    }
}

#[test]
fn every_byte_of_the_ciphertext_is_sensitive_to_tampering() {
    // Flipping any single byte must not silently decapsulate to the original
    // shared secret: implicit rejection should kick in for each position.
    let kem = Kem::new(Params::KYBER512);
    let (ek, dk) = kem.keygen(&mut OsRng).unwrap();
    let (ct, ss_bob) = kem.encapsulate(&ek, &mut OsRng).unwrap();

    for i in [0, ct.len() / 2, ct.len() - 1] {
        let mut tampered = ct.clone();
        tampered[i] ^= 0xFF;
        let ss_tampered = kem.decapsulate(&dk, &tampered).unwrap();
        assert_ne!(ss_tampered, ss_bob, "byte {i} tamper went undetected");
    }
}

#[test]
fn two_independent_keypairs_never_agree_on_a_fixed_ciphertext() {
    let kem = Kem::new(Params::KYBER512);
    let (ek_a, dk_a) = kem.keygen(&mut OsRng).unwrap();
    let (_ek_b, dk_b) = kem.keygen(&mut OsRng).unwrap();

    let (ct, ss_a) = kem.encapsulate(&ek_a, &mut OsRng).unwrap();
    let ss_b_decaps_under_wrong_key = kem.decapsulate(&dk_b, &ct).unwrap();
    assert_ne!(ss_a, ss_b_decaps_under_wrong_key);
}

#[test]
fn decapsulation_never_panics_on_random_wrong_length_input() {
    let kem = Kem::new(Params::KYBER768);
    let (_ek, dk) = kem.keygen(&mut OsRng).unwrap();
    assert!(kem.decapsulate(&dk, &[]).is_err());
    assert!(kem.decapsulate(&dk, &[0u8; 1]).is_err());
    assert!(DecapsulationKey::from_bytes(Params::KYBER768, vec![]).is_err());
}
