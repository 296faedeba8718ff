//! Centered binomial sampling and uniform(-ish) matrix expansion from a seed.

use crate::coding::bytes_to_bits;
use crate::error::Error;
use crate::hash::{prf, xof};
use crate::params::{N, Q};
use crate::ring::{Matrix, Polynomial, PolynomialVector};

/// `CBD(input, eta)`: input must be exactly `64 * eta` bytes. Bits are
/// unpacked MSB-first per byte; coefficient `i` is `(a - b) mod q` where `a`
/// and `b` are sums of `eta` consecutive bits.
pub fn cbd(input: &[u8], eta: usize) -> Result<Polynomial, Error> {
    if input.len() != 64 * eta {
        return Err(Error::InvalidArgument("cbd input must be 64*eta bytes"));
    }
    let bits = bytes_to_bits(input);
    let mut coeffs = [0i16; N];
    for i in 0..N {
        let a: i32 = (0..eta).map(|j| bits[2 * i * eta + j] as i32).sum();
        let b: i32 = (0..eta).map(|j| bits[2 * i * eta + eta + j] as i32).sum();
        coeffs[i] = (a - b).rem_euclid(Q) as i16;
    }
    Ok(Polynomial { coeffs })
}

/// `random_poly_vector(k, n_start, eta, seed)`: `PRF(seed, n_start + i, 64*eta)`
/// then CBD-sample, for `i in 0..k`.
pub fn random_poly_vector(
    k: usize,
    n_start: u8,
    eta: usize,
    seed: &[u8; 32],
) -> Result<PolynomialVector, Error> {
    let mut polys = Vec::with_capacity(k);
    for i in 0..k {
        let nonce = n_start
            .checked_add(i as u8)
            .ok_or(Error::Internal("PRF nonce counter overflowed a byte"))?;
        let bytes = prf(seed, nonce, 64 * eta);
        polys.push(cbd(&bytes, eta)?);
    }
    Ok(PolynomialVector { polys })
}

/// The single-polynomial case of `random_poly_vector`, used for `e2`.
pub fn random_poly(eta: usize, seed: &[u8; 32], nonce: u8) -> Result<Polynomial, Error> {
    let bytes = prf(seed, nonce, 64 * eta);
    cbd(&bytes, eta)
}

/// `expand(rho, k)`: builds the k×k matrix `A` by querying
/// `XOF(rho ‖ byte(i) ‖ byte(j), 2n)` for each `(i, j)` in row-major order and
/// interpreting consecutive little-endian 16-bit pairs `mod q`. Modular
/// reduction, not rejection sampling: coefficients are biased toward the low
/// end of `[0, q)`, an intentional simplification over a uniform sampler.
pub fn expand(rho: &[u8; 32], k: usize) -> Matrix {
    let mut rows = Vec::with_capacity(k);
    for i in 0..k {
        let mut row = Vec::with_capacity(k);
        for j in 0..k {
            let mut seed = Vec::with_capacity(34);
            seed.extend_from_slice(rho);
            seed.push(i as u8);
            seed.push(j as u8);
            let bytes = xof(&seed, 2 * N);

            let mut coeffs = [0i16; N];
            for l in 0..N {
                let lo = bytes[2 * l] as u16;
                let hi = bytes[2 * l + 1] as u16;
                let word = lo | (hi << 8);
                coeffs[l] = (word as i32 % Q) as i16;
            }
            row.push(Polynomial { coeffs });
        }
        rows.push(row);
    }
    Matrix { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cbd_rejects_wrong_length() {
        assert!(cbd(&[0u8; 10], 2).is_err());
    }

    #[test]
    fn cbd_coefficients_bounded_by_eta() {
        let input = [0xFFu8; 64 * 3];
        let p = cbd(&input, 3).unwrap();
        // all-ones input: every bit is 1, so a=b=eta for every coefficient -> 0
        assert_eq!(p, Polynomial::zero());
    }

    #[test]
    fn cbd_statistical_mean_and_variance() {
        // deterministic pseudorandom byte stream standing in for the
        // randomness port: mean should be ~0, variance ~eta/2.
        let eta = 2usize;
        let samples = 20_000usize;
        let mut state: u64 = 0x243F6A8885A308D3;
        let mut sum: i64 = 0;
        let mut sum_sq: i64 = 0;
        let mut count = 0usize;

        let mut buf = vec![0u8; 64 * eta];
        while count < samples {
            for b in buf.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *b = (state & 0xFF) as u8;
            }
            let p = cbd(&buf, eta).unwrap();
            for &c in p.coeffs.iter() {
                let centered = if c > Q / 2 { c as i64 - Q as i64 } else { c as i64 };
                sum += centered;
                sum_sq += centered * centered;
                count += 1;
                if count >= samples {
                    break;
                }
            }
        }

        let mean = sum as f64 / count as f64;
        let variance = sum_sq as f64 / count as f64 - mean * mean;
        assert!(mean.abs() < 0.2, "mean {mean} too far from 0");
        assert!((variance - eta as f64 / 2.0).abs() < 0.3, "variance {variance}");
    }

    #[test]
    fn expand_is_deterministic() {
        let rho = [9u8; 32];
        let a1 = expand(&rho, 3);
        let a2 = expand(&rho, 3);
        assert_eq!(a1, a2);
    }

    #[test]
    fn expand_different_seeds_differ() {
        let a = expand(&[1u8; 32], 2);
        let b = expand(&[2u8; 32], 2);
        assert_ne!(a, b);
    }

    #[test]
    fn random_poly_vector_nonce_start_changes_output() {
        let seed = [5u8; 32];
        let v0 = random_poly_vector(3, 0, 2, &seed).unwrap();
        let v1 = random_poly_vector(3, 3, 2, &seed).unwrap();
        assert_ne!(v0, v1);
    }
}
