//! The named parameter tuples: kyber512/768/1024.
//!
//! Parameters are selected at construction time rather than baked into a
//! type, so `Params` is a plain `Copy` value rather than a trait implemented
//! by zero-sized marker types.

use crate::error::Error;

/// Polynomial degree, fixed for every parameter set this crate supports.
pub const N: usize = 256;

/// Prime modulus, fixed for every parameter set this crate supports.
pub const Q: i32 = 3329;

/// A named parameter tuple: module rank `k`, CBD widths `eta1`/`eta2`, and
/// ciphertext compression widths `du`/`dv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub name: &'static str,
    pub k: usize,
    pub eta1: usize,
    pub eta2: usize,
    pub du: usize,
    pub dv: usize,
}

impl Params {
    /// ML-KEM-512-equivalent toy parameters.
    pub const KYBER512: Params = Params {
        name: "kyber512",
        k: 2,
        eta1: 3,
        eta2: 2,
        du: 10,
        dv: 4,
    };

    /// ML-KEM-768-equivalent toy parameters.
    pub const KYBER768: Params = Params {
        name: "kyber768",
        k: 3,
        eta1: 2,
        eta2: 2,
        du: 10,
        dv: 4,
    };

    /// ML-KEM-1024-equivalent toy parameters.
    pub const KYBER1024: Params = Params {
        name: "kyber1024",
        k: 4,
        eta1: 2,
        eta2: 2,
        du: 11,
        dv: 5,
    };

    /// Looks up a named parameter set ("kyber512", "kyber768", "kyber1024").
    pub fn by_name(name: &str) -> Result<Params, Error> {
        match name {
            "kyber512" => Ok(Params::KYBER512),
            "kyber768" => Ok(Params::KYBER768),
            "kyber1024" => Ok(Params::KYBER1024),
            _ => Err(Error::InvalidArgument("unknown parameter set name")),
        }
    }

    /// Serialized PKE public-key length in bytes: `32 + 384k`.
    pub const fn pke_pk_len(&self) -> usize {
        32 + 384 * self.k
    }

    /// Serialized PKE private-key length in bytes: `384k`.
    pub const fn pke_sk_len(&self) -> usize {
        384 * self.k
    }

    /// Serialized PKE ciphertext length in bytes: `k*n*du/8 + n*dv/8`.
    pub const fn pke_ct_len(&self) -> usize {
        self.k * N * self.du / 8 + N * self.dv / 8
    }

    /// Serialized KEM decapsulation-key length in bytes:
    /// `384k + (384k+32) + 32 + 32`.
    pub const fn kem_dk_len(&self) -> usize {
        self.pke_sk_len() + self.pke_pk_len() + 32 + 32
    }
}
