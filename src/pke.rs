//! K-PKE: IND-CPA public-key encryption — keygen/encrypt/decrypt over the
//! ring arithmetic, samplers, and coding built up in
//! `ring.rs`/`sampling.rs`/`coding.rs`.

use rand_core::{CryptoRng, RngCore};

use crate::coding::{compress, decode_vec, decompress, encode_vec};
use crate::error::Error;
use crate::hash::G;
use crate::params::{Params, N};
use crate::ring::{Polynomial, PolynomialVector};
use crate::sampling::{expand, random_poly, random_poly_vector};

/// A deserialized K-PKE private key: the secret vector `s` mod q, plus a
/// zeroizing drop so the coefficients do not linger in memory.
#[derive(Clone, zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    params: Params,
    s: PolynomialVector,
}

/// K-PKE keygen/encrypt/decrypt for a fixed [`Params`] value.
pub struct Pke {
    pub params: Params,
}

impl Pke {
    pub fn new(params: Params) -> Self {
        Pke { params }
    }

    fn check_len(buf: &[u8], expected: usize, what: &'static str) -> Result<(), Error> {
        if buf.len() != expected {
            return Err(Error::InvalidArgument(what));
        }
        Ok(())
    }

    /// `pke_keygen`: draws a fresh 32-byte seed from `rng` and derives
    /// `(pk_bytes, sk_bytes)`.
    pub fn keygen<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<(Vec<u8>, Vec<u8>), Error> {
        let mut d = [0u8; 32];
        rng.try_fill_bytes(&mut d)
            .map_err(|_| Error::RandomnessFailure)?;
        self.keygen_from_seed(&d)
    }

    /// Deterministic keygen from an explicit 32-byte seed `d`, exposed for
    /// known-answer-style tests.
    pub fn keygen_from_seed(&self, d: &[u8; 32]) -> Result<(Vec<u8>, Vec<u8>), Error> {
        let k = self.params.k;
        let (rho, sigma) = G::evaluate(d);

        let a = expand(&rho, k);
        let s = random_poly_vector(k, 0, self.params.eta1, &sigma)?;
        let e = random_poly_vector(k, 0, self.params.eta2, &sigma)?;

        let t = a.mul_vec(&s)?.add(&e)?;

        let mut pk = rho.to_vec();
        pk.extend(encode_vec(&t, 12));

        let sk = encode_vec(&s, 12);

        Ok((pk, sk))
    }

    /// `pke_encrypt`: encrypts 256 message bits under `pk_bytes` using
    /// `r_seed` to drive `r`, `e1`, `e2` (all from nonce 0, per the toy's
    /// intentional nonce-reuse convention).
    pub fn encrypt(
        &self,
        pk_bytes: &[u8],
        msg_bits: &[u8],
        r_seed: &[u8; 32],
    ) -> Result<Vec<u8>, Error> {
        let k = self.params.k;
        Self::check_len(pk_bytes, self.params.pke_pk_len(), "wrong-length PKE public key")?;
        if msg_bits.len() != N {
            return Err(Error::InvalidArgument("message must be exactly N bits"));
        }

        let rho: [u8; 32] = pk_bytes[..32].try_into().unwrap();
        let t = decode_vec(&pk_bytes[32..], k, 12)?;

        let a = expand(&rho, k);
        let r = random_poly_vector(k, 0, self.params.eta1, r_seed)?;
        let e1 = random_poly_vector(k, 0, self.params.eta2, r_seed)?;
        let e2 = random_poly(self.params.eta2, r_seed, 0)?;

        let u = a.transpose_mul_vec(&r)?.add(&e1)?;

        let q_half = crate::coding::round_up_ties(crate::params::Q as f64 / 2.0) as i16;
        let mut m_coeffs = [0i16; N];
        for (dst, &bit) in m_coeffs.iter_mut().zip(msg_bits.iter()) {
            *dst = (bit as i16) * q_half;
        }
        let m_poly = Polynomial::from_coeffs(m_coeffs);

        let tr = t.inner_product(&r)?;
        let v = &(&tr + &e2) + &m_poly;

        let mut c1 = Vec::with_capacity(k * N * self.params.du / 8);
        for poly in &u.polys {
            let compressed: Vec<i16> = poly
                .coeffs
                .iter()
                .map(|&c| compress(c, self.params.du) as i16)
                .collect();
            c1.extend(crate::coding::encode(&compressed, self.params.du));
        }

        let compressed_v: Vec<i16> = v
            .coeffs
            .iter()
            .map(|&c| compress(c, self.params.dv) as i16)
            .collect();
        c1.extend(crate::coding::encode(&compressed_v, self.params.dv));

        Ok(c1)
    }

    /// `pke_decrypt`: always returns 256 message bits, never errors on a
    /// tampered ciphertext body (only on wrong-length input).
    pub fn decrypt(&self, sk_bytes: &[u8], ct_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let k = self.params.k;
        Self::check_len(sk_bytes, self.params.pke_sk_len(), "wrong-length PKE private key")?;
        Self::check_len(ct_bytes, self.params.pke_ct_len(), "wrong-length ciphertext")?;

        let u_bytes_len = k * N * self.params.du / 8;
        let (u_bytes, v_bytes) = ct_bytes.split_at(u_bytes_len);

        let u_block_len = N * self.params.du / 8;
        let mut u_polys = Vec::with_capacity(k);
        for i in 0..k {
            let block = &u_bytes[i * u_block_len..(i + 1) * u_block_len];
            let compressed = crate::coding::decode(block, N, self.params.du);
            let coeffs: Vec<i16> = compressed
                .iter()
                .map(|&c| decompress(c as u16, self.params.du))
                .collect();
            u_polys.push(Polynomial::from_slice(&coeffs)?);
        }
        let u = PolynomialVector { polys: u_polys };

        let compressed_v = crate::coding::decode(v_bytes, N, self.params.dv);
        let v_coeffs: Vec<i16> = compressed_v
            .iter()
            .map(|&c| decompress(c as u16, self.params.dv))
            .collect();
        let v = Polynomial::from_slice(&v_coeffs)?;

        let sk = PrivateKey::parse(self.params, sk_bytes)?;

        let su = sk.s.inner_product(&u)?;
        let m_poly = &v - &su;

        let bits: Vec<u8> = m_poly
            .coeffs
            .iter()
            .map(|&c| crate::coding::round_q(c, crate::params::Q as i16))
            .collect();
        Ok(bits)
    }
}

impl PrivateKey {
    /// Parses raw `sk_bytes` into a structured, zeroizing private key.
    pub fn parse(params: Params, sk_bytes: &[u8]) -> Result<PrivateKey, Error> {
        if sk_bytes.len() != params.pke_sk_len() {
            return Err(Error::InvalidArgument("wrong-length PKE private key"));
        }
        Ok(PrivateKey {
            params,
            s: decode_vec(sk_bytes, params.k, 12)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn roundtrip_kyber512_fixed_seed() {
        let pke = Pke::new(Params::KYBER512);
        let seed = [0x11u8; 32];
        let (pk, sk) = pke.keygen_from_seed(&seed).unwrap();

        let mut msg = [0u8; N];
        for (i, b) in msg.iter_mut().enumerate() {
            *b = ((i * 7 + 3) % 2) as u8;
        }

        let r_seed = [0x01u8; 32];
        let ct = pke.encrypt(&pk, &msg, &r_seed).unwrap();
        let decrypted = pke.decrypt(&sk, &ct).unwrap();
        assert_eq!(decrypted, msg);
    }

    #[test]
    fn roundtrip_all_param_sets_with_os_rng() {
        for params in [Params::KYBER512, Params::KYBER768, Params::KYBER1024] {
            let pke = Pke::new(params);
            let (pk, sk) = pke.keygen(&mut OsRng).unwrap();

            let mut msg = [0u8; N];
            for (i, b) in msg.iter_mut().enumerate() {
                *b = ((i * 13 + 5) % 2) as u8;
            }
            let mut r_seed = [0u8; 32];
            OsRng.try_fill_bytes(&mut r_seed).unwrap();

            let ct = pke.encrypt(&pk, &msg, &r_seed).unwrap();
            let decrypted = pke.decrypt(&sk, &ct).unwrap();
            assert_eq!(decrypted, msg, "mismatch for {}", params.name);
        }
    }

    #[test]
    fn rejects_wrong_length_buffers() {
        let pke = Pke::new(Params::KYBER512);
        let (pk, sk) = pke.keygen_from_seed(&[0u8; 32]).unwrap();
        assert!(pke.encrypt(&pk[1..], &[0u8; N], &[0u8; 32]).is_err());
        assert!(pke.decrypt(&sk, &[0u8; 10]).is_err());
    }

    #[test]
    fn private_key_parses_and_is_wired_into_decrypt() {
        let pke = Pke::new(Params::KYBER512);
        let (pk, sk) = pke.keygen_from_seed(&[3u8; 32]).unwrap();
        let parsed = PrivateKey::parse(Params::KYBER512, &sk).unwrap();
        assert_eq!(parsed.s.len(), Params::KYBER512.k);
        assert!(parsed.s.polys.iter().all(|p| p.coeffs.len() == N));

        // `decrypt` itself routes sk_bytes through `PrivateKey::parse`.
        let msg = [1u8; N];
        let ct = pke.encrypt(&pk, &msg, &[9u8; 32]).unwrap();
        assert_eq!(pke.decrypt(&sk, &ct).unwrap(), msg);
    }
}
