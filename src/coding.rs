//! Coefficient compression/decompression, bit-packed (de)serialization of
//! polynomials and vectors, and message-to-coefficient mapping.
//!
//! The bit-packing convention here — LSB-first within a coefficient, then
//! MSB-first within each assembled byte — deliberately differs from the
//! FIPS-203-style convention (see `DESIGN.md` for the rationale).

use crate::error::Error;
use crate::params::Q;
use crate::ring::{Polynomial, PolynomialVector};

/// Rounds to the nearest integer, with halves always rounded toward `+inf`.
pub fn round_up_ties(x: f64) -> i64 {
    let floor = x.floor();
    if x - floor == 0.5 {
        x.ceil() as i64
    } else {
        x.round() as i64
    }
}

/// The symmetric representative of `v` modulo `q`, mapped into `(-q/2, q/2]`.
pub fn mods(v: i64, q: i64) -> i64 {
    ((v + q / 2).rem_euclid(q)) - q / 2
}

/// Decides a message bit from a noisy coefficient: `0` iff `mods(v, q)` lies
/// strictly in `(-q/4, q/4)`, else `1`.
pub fn round_q(v: i16, q: i16) -> u8 {
    let sym = mods(v as i64, q as i64);
    // -q/4 < sym < q/4, compared exactly by scaling both sides by 4.
    if -(q as i64) < 4 * sym && 4 * sym < q as i64 {
        0
    } else {
        1
    }
}

/// `compress(x, d) = round_up_ties(2^d * x / q) mod 2^d`.
pub fn compress(x: i16, d: usize) -> u16 {
    let two_pow_d = 1i64 << d;
    let rounded = round_up_ties((two_pow_d as f64 * x as f64) / Q as f64);
    rounded.rem_euclid(two_pow_d) as u16
}

/// `decompress(y, d) = round_up_ties(q * y / 2^d) mod q`.
pub fn decompress(y: u16, d: usize) -> i16 {
    let two_pow_d = (1i64 << d) as f64;
    let rounded = round_up_ties((Q as f64 * y as f64) / two_pow_d);
    rounded.rem_euclid(Q as i64) as i16
}

/// Unpacks a byte slice into a bit vector, MSB-first within each byte (bit 0
/// of the output is bit 7 of the first byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in 0..8 {
            bits.push((byte >> (7 - i)) & 1);
        }
    }
    bits
}

/// Inverse of [`bytes_to_bits`]. `bits.len()` must be a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit != 0 {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}

/// Bit-packs a coefficient array `ℓ` bits per coefficient (LSB-first within a
/// coefficient), then groups the resulting bitstream into bytes (MSB-first
/// within a byte).
pub fn encode(coeffs: &[i16], l: usize) -> Vec<u8> {
    let mut bits = vec![0u8; coeffs.len() * l];
    for (i, &c) in coeffs.iter().enumerate() {
        for j in 0..l {
            bits[i * l + j] = ((c as u32 >> j) & 1) as u8;
        }
    }
    bits_to_bytes(&bits)
}

/// Inverse of [`encode`]: unpack MSB-first per byte, then reassemble
/// coefficients LSB-first, reducing mod `m` (`2^l` for `l < 12`, else `q`).
/// Short input is zero-padded on the right.
pub fn decode(bytes: &[u8], n: usize, l: usize) -> Vec<i16> {
    let m: i32 = if l >= 12 { Q } else { 1i32 << l };
    let required_bits = n * l;
    let mut bits = bytes_to_bits(bytes);
    if bits.len() < required_bits {
        bits.resize(required_bits, 0);
    }

    let mut out = vec![0i16; n];
    for i in 0..n {
        let mut coeff: i32 = 0;
        for j in 0..l {
            coeff += (bits[i * l + j] as i32) << j;
        }
        out[i] = coeff.rem_euclid(m) as i16;
    }
    out
}

/// Encodes a [`Polynomial`] with `l` bits per coefficient.
pub fn encode_poly(p: &Polynomial, l: usize) -> Vec<u8> {
    encode(&p.coeffs, l)
}

/// Decodes a single polynomial's worth of bytes (`n * l` bits).
pub fn decode_poly(bytes: &[u8], l: usize) -> Polynomial {
    let coeffs = decode(bytes, crate::params::N, l);
    Polynomial::from_slice(&coeffs).expect("decode always yields N coefficients")
}

/// Encodes a [`PolynomialVector`], concatenating each polynomial's
/// fixed-length block with no padding between polynomials.
pub fn encode_vec(v: &PolynomialVector, l: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(v.len() * crate::params::N * l / 8);
    for p in &v.polys {
        out.extend(encode_poly(p, l));
    }
    out
}

/// Decodes a [`PolynomialVector`] of `k` polynomials, each `n * l / 8` bytes.
pub fn decode_vec(bytes: &[u8], k: usize, l: usize) -> Result<PolynomialVector, Error> {
    let block_len = crate::params::N * l / 8;
    if bytes.len() < block_len * k {
        return Err(Error::InvalidArgument("encoded vector too short"));
    }
    let mut polys = Vec::with_capacity(k);
    for i in 0..k {
        polys.push(decode_poly(&bytes[i * block_len..(i + 1) * block_len], l));
    }
    Ok(PolynomialVector { polys })
}

/// Interprets `bytes` as a bitstring (MSB-first per byte), right-padded with
/// zero bits to length `n`.
pub fn preprocess_message(bytes: &[u8], n: usize) -> Vec<u8> {
    let mut bits = bytes_to_bits(bytes);
    bits.resize(n, 0);
    bits
}

/// Truncates `bits` to `original_len_bits` and reassembles bytes MSB-first.
pub fn postprocess_message(bits: &[u8], original_len_bits: usize) -> Vec<u8> {
    bits_to_bytes(&bits[..original_len_bits.min(bits.len())])
}
