#![no_main]
use libfuzzer_sys::fuzz_target;
use kyber_toy::kem::Kem;
use kyber_toy::params::Params;
use kyber_toy::rng::ReplayRng;

fuzz_target!(|data: &[u8]| {
    if data.len() < 97 {
        return;
    }

    let corruption_byte = if data[96] == 0 { 1 } else { data[96] };

    let kem = Kem::new(Params::KYBER768);

    // `ReplayRng` wraps, so keygen (64 bytes) and encapsulate (32 bytes)
    // both draw deterministically from the fuzzer-supplied corpus entry.
    let mut rng = ReplayRng::new(&data[0..96]);
    let (ek, dk) = match kem.keygen(&mut rng) {
        Ok(pair) => pair,
        Err(_) => return,
    };
    let (ciphertext, shared_secret_bob) = match kem.encapsulate(&ek, &mut rng) {
        Ok(pair) => pair,
        Err(_) => return,
    };

    let shared_secret_alice = kem.decapsulate(&dk, &ciphertext).unwrap();
    assert_eq!(shared_secret_bob, shared_secret_alice);

    let mut bad_ciphertext = ciphertext.clone();
    if let Some(byte_to_change) = bad_ciphertext.get_mut(0) {
        *byte_to_change ^= corruption_byte;
    }

    let shared_secret_corrupted = kem.decapsulate(&dk, &bad_ciphertext).unwrap();
    assert_ne!(shared_secret_bob, shared_secret_corrupted);
});
