//! IND-CCA key-encapsulation mechanism built from [`crate::pke`] via a
//! Fujisaki-Okamoto-style transform: re-encryption plus implicit rejection.
//!
//! Decapsulation computes both the honest-path and rejection-path keys
//! unconditionally and selects between them with `subtle`, never branching
//! control flow on ciphertext equality.

use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::coding::{postprocess_message, preprocess_message};
use crate::error::Error;
use crate::hash::{kdf32, G, H};
use crate::params::Params;
use crate::pke::Pke;

/// A KEM decapsulation key: `sk_pke ‖ pk_pke ‖ H(pk_pke) ‖ z`, the full
/// long-term secret an application must keep private. Zeroized on drop,
/// mirroring [`crate::pke::PrivateKey`].
#[derive(Clone, zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct DecapsulationKey(Vec<u8>);

impl DecapsulationKey {
    /// Parses raw bytes into a `DecapsulationKey`, checking the length
    /// implied by `params`.
    pub fn from_bytes(params: Params, bytes: Vec<u8>) -> Result<Self, Error> {
        if bytes.len() != params.kem_dk_len() {
            return Err(Error::InvalidArgument("wrong-length decapsulation key"));
        }
        Ok(DecapsulationKey(bytes))
    }

    /// The raw bytes, for applications that persist the key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty (always `false` for a validly parsed key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A 32-byte shared secret. Zeroized on drop.
#[derive(Clone, zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct SharedSecret(pub [u8; 32]);

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}
impl Eq for SharedSecret {}

/// The IND-CCA KEM for a fixed [`Params`] value.
pub struct Kem {
    pub params: Params,
    pke: Pke,
}

impl Kem {
    pub fn new(params: Params) -> Self {
        Kem {
            params,
            pke: Pke::new(params),
        }
    }

    fn check_len(buf: &[u8], expected: usize, what: &'static str) -> Result<(), Error> {
        if buf.len() != expected {
            return Err(Error::InvalidArgument(what));
        }
        Ok(())
    }

    /// `kem_keygen`: `(pk, sk) <- PKE.keygen`; `z <- 32 random bytes`;
    /// `ek = pk`; `dk = sk ‖ pk ‖ H(pk) ‖ z`.
    pub fn keygen<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Vec<u8>, DecapsulationKey), Error> {
        let (ek, sk) = self.pke.keygen(rng)?;
        let mut z = [0u8; 32];
        rng.try_fill_bytes(&mut z)
            .map_err(|_| Error::RandomnessFailure)?;

        let mut dk_bytes = sk;
        dk_bytes.extend_from_slice(&ek);
        dk_bytes.extend_from_slice(&H::evaluate(&ek));
        dk_bytes.extend_from_slice(&z);
        z.zeroize();

        Ok((ek, DecapsulationKey(dk_bytes)))
    }

    /// `kem_encapsulate`: draws the 32-byte pre-key `m` from `rng`.
    pub fn encapsulate<R: RngCore + CryptoRng>(
        &self,
        ek_bytes: &[u8],
        rng: &mut R,
    ) -> Result<(Vec<u8>, SharedSecret), Error> {
        Self::check_len(ek_bytes, self.params.pke_pk_len(), "wrong-length encapsulation key")?;

        let mut seed = [0u8; 32];
        rng.try_fill_bytes(&mut seed)
            .map_err(|_| Error::RandomnessFailure)?;
        let m = H::evaluate(&seed);
        self.encapsulate_from_prekey(ek_bytes, &m)
    }

    /// Deterministic encapsulation from an explicit 32-byte pre-key `m`,
    /// exposed for known-answer-style tests.
    pub fn encapsulate_from_prekey(
        &self,
        ek_bytes: &[u8],
        m: &[u8; 32],
    ) -> Result<(Vec<u8>, SharedSecret), Error> {
        Self::check_len(ek_bytes, self.params.pke_pk_len(), "wrong-length encapsulation key")?;

        let h_ek = H::evaluate(ek_bytes);
        let mut g_input = m.to_vec();
        g_input.extend_from_slice(&h_ek);
        let (k_hat, r) = G::evaluate(&g_input);

        let m_bits = preprocess_message(m, crate::params::N);
        let ct = self.pke.encrypt(ek_bytes, &m_bits, &r)?;

        let h_ct = H::evaluate(&ct);
        let mut kdf_input = k_hat.to_vec();
        kdf_input.extend_from_slice(&h_ct);
        let k = kdf32(&kdf_input)?;

        Ok((ct, SharedSecret(k)))
    }

    /// `kem_decapsulate`: re-encrypts under the recovered message and
    /// constant-time-selects between the honest key and the implicit
    /// rejection key. Never returns `Err` for a tampered, correctly-sized
    /// ciphertext.
    pub fn decapsulate(
        &self,
        dk: &DecapsulationKey,
        ct_bytes: &[u8],
    ) -> Result<SharedSecret, Error> {
        let dk_bytes = dk.as_bytes();
        Self::check_len(dk_bytes, self.params.kem_dk_len(), "wrong-length decapsulation key")?;
        Self::check_len(ct_bytes, self.params.pke_ct_len(), "wrong-length ciphertext")?;

        let sk_len = self.params.pke_sk_len();
        let pk_len = self.params.pke_pk_len();
        let sk = &dk_bytes[0..sk_len];
        let pk = &dk_bytes[sk_len..sk_len + pk_len];
        let h_pk = &dk_bytes[sk_len + pk_len..sk_len + pk_len + 32];
        let z = &dk_bytes[sk_len + pk_len + 32..sk_len + pk_len + 64];

        let m_bits = self.pke.decrypt(sk, ct_bytes)?;
        let m_prime = postprocess_message(&m_bits, crate::params::N);

        let mut g_input = m_prime.clone();
        g_input.extend_from_slice(h_pk);
        let (k_hat_prime, r_prime) = G::evaluate(&g_input);

        let ct_prime = self.pke.encrypt(pk, &m_bits, &r_prime)?;

        let h_ct = H::evaluate(ct_bytes);
        let mut honest_input = k_hat_prime.to_vec();
        honest_input.extend_from_slice(&h_ct);
        let k_honest = kdf32(&honest_input)?;

        let mut reject_input = z.to_vec();
        reject_input.extend_from_slice(&h_ct);
        let k_reject = kdf32(&reject_input)?;

        // Constant-time selection: never branch control flow on ct == ct'.
        let ciphertexts_match: Choice = ct_bytes.ct_eq(ct_prime.as_slice());
        let mut k = [0u8; 32];
        for i in 0..32 {
            k[i] = u8::conditional_select(&k_reject[i], &k_honest[i], ciphertexts_match);
        }

        Ok(SharedSecret(k))
    }
}
