//! # kyber-toy
//!
//! A **pure Rust**, **educational** implementation of a Kyber-family
//! lattice-based key-encapsulation mechanism (KEM), together with the
//! IND-CPA public-key encryption (K-PKE) scheme it is built from.
//!
//! This is a *toy*: schoolbook ring arithmetic instead of an NTT, a
//! modular-reduction matrix expansion instead of rejection sampling, and a
//! pre-standard serialization that is deliberately **not** FIPS 203 byte
//! compatible. It exists to make every step of the construction legible, not
//! to be dropped into a production TLS stack.
//!
//! ## 🛡️ Security posture
//!
//! * **Constant time where it matters**: ciphertext-equality comparison and
//!   the honest-key/implicit-rejection-key selection in decapsulation are
//!   performed via the [`subtle`] crate, never as a plain `if`.
//! * **Memory clearing**: secret-carrying types ([`pke::PrivateKey`],
//!   [`kem::SharedSecret`]) implement [`zeroize::Zeroize`] /
//!   [`zeroize::ZeroizeOnDrop`].
//! * **Panic-free core**: all fallible entry points return a
//!   `Result<_, error::Error>`; wrong-length inputs are rejected before any
//!   cryptographic work begins.
//! * **Determinism on demand**: `keygen`/`encapsulate` accept any `R: RngCore
//!   + CryptoRng`, so tests can inject a deterministic source
//!   ([`rng::ReplayRng`]) while production uses `rand::rngs::OsRng`.
//!
//! What this crate does **not** attempt: side-channel-hardened arithmetic
//! beyond the constant-time selection above, NTT acceleration, FIPS 203 byte
//! compatibility, certificate formats, or authenticated key exchange. An
//! enclosing transport (handshake framing, AEAD bulk encryption) is entirely
//! out of scope — the KEM hands back an opaque 32-byte [`kem::SharedSecret`]
//! and nothing more.
//!
//! ## 🚀 Quick start (toy Kyber-768)
//!
//! ```rust
//! use kyber_toy::kem::Kem;
//! use kyber_toy::params::Params;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let kem = Kem::new(Params::KYBER768);
//!
//! // Alice generates a key pair and publishes the encapsulation key.
//! let (ek, dk) = kem.keygen(&mut OsRng)?;
//!
//! // Bob encapsulates against it.
//! let (ciphertext, shared_secret_bob) = kem.encapsulate(&ek, &mut OsRng)?;
//!
//! // Alice decapsulates and recovers the same secret.
//! let shared_secret_alice = kem.decapsulate(&dk, &ciphertext)?;
//! assert_eq!(shared_secret_bob, shared_secret_alice);
//! # Ok(())
//! # }
//! ```
//!
//! ## 📦 Architecture
//!
//! - [`ring`]: polynomial/vector/matrix arithmetic over `Z_q[x]/(x^256+1)`.
//! - [`hash`]: raw SHA3-256/512/SHAKE-128/256 wrappers (`H`, `G`, `XOF`,
//!   `PRF`, `KDF`).
//! - [`sampling`]: centered binomial sampling and seed-to-matrix expansion.
//! - [`coding`]: compression, bit-packed (de)serialization, message mapping.
//! - [`params`]: the three named parameter sets.
//! - [`pke`]: IND-CPA K-PKE keygen/encrypt/decrypt.
//! - [`kem`]: the IND-CCA KEM built from K-PKE via implicit rejection.
//! - [`rng`]: a deterministic test-only randomness source.
//! - [`error`]: the crate's error taxonomy.
//!
//! [`KYBER512`], [`KYBER768`], and [`KYBER1024`] are re-exported at the crate
//! root as shorthand for `params::Params::KYBER512` and friends.

pub mod coding;
pub mod error;
pub mod hash;
pub mod kem;
pub mod params;
pub mod pke;
pub mod ring;
pub mod rng;
pub mod sampling;

use params::Params;

/// Toy ML-KEM-512-equivalent parameters. Shorthand for [`Params::KYBER512`].
pub const KYBER512: Params = Params::KYBER512;

/// Toy ML-KEM-768-equivalent parameters. Shorthand for [`Params::KYBER768`].
pub const KYBER768: Params = Params::KYBER768;

/// Toy ML-KEM-1024-equivalent parameters. Shorthand for [`Params::KYBER1024`].
pub const KYBER1024: Params = Params::KYBER1024;
