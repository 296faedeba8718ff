//! Raw wrappers around `sha3`'s SHA3-256/512 and SHAKE-128/256 — domain
//! separation is entirely the caller's responsibility; nothing here prefixes
//! or tags its input.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

use crate::error::Error;

/// `H : B* -> B^32`, via SHA3-256.
#[derive(Default)]
pub struct H {
    hasher: Sha3_256,
}

impl H {
    pub fn new() -> Self {
        Self { hasher: Sha3_256::new() }
    }

    pub fn absorb(&mut self, data: &[u8]) {
        Update::update(&mut self.hasher, data);
    }

    pub fn squeeze(self) -> [u8; 32] {
        self.hasher.finalize().into()
    }

    pub fn evaluate(data: &[u8]) -> [u8; 32] {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.squeeze()
    }
}

/// `G : B* -> B^32 x B^32`, via SHA3-512, split at byte 32.
#[derive(Default)]
pub struct G {
    hasher: Sha3_512,
}

impl G {
    pub fn new() -> Self {
        Self { hasher: Sha3_512::new() }
    }

    pub fn absorb(&mut self, data: &[u8]) {
        Update::update(&mut self.hasher, data);
    }

    pub fn squeeze(self) -> ([u8; 32], [u8; 32]) {
        let digest = self.hasher.finalize();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        a.copy_from_slice(&digest[0..32]);
        b.copy_from_slice(&digest[32..64]);
        (a, b)
    }

    pub fn evaluate(data: &[u8]) -> ([u8; 32], [u8; 32]) {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.squeeze()
    }
}

/// `XOF(data, len) -> len bytes` via SHAKE-128.
pub fn xof(data: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake128::default();
    Update::update(&mut hasher, data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

/// `PRF(seed, nonce, len) -> len bytes` via SHAKE-256 over `seed ‖ nonce`.
/// `nonce` is a single little-endian byte, matching the per-sample nonce
/// convention in `sampling.rs`.
pub fn prf(seed: &[u8; 32], nonce: u8, len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, seed);
    Update::update(&mut hasher, &[nonce]);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

/// `KDF(data, len) -> len bytes` via SHAKE-256.
pub fn kdf(data: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

/// `KDF` sized to exactly 32 bytes, the shape every KEM call site needs.
pub fn kdf32(data: &[u8]) -> Result<[u8; 32], Error> {
    let out = kdf(data, 32);
    out.try_into()
        .map_err(|_| Error::Internal("kdf32 produced the wrong length"))
}
