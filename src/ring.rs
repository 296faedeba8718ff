//! Polynomial ring arithmetic over `Z_q[x]/(x^n+1)`: polynomials, vectors of
//! polynomials, and the k×k matrices built from them.
//!
//! Schoolbook multiplication only — this is a teaching implementation and
//! intentionally skips NTT acceleration.

use core::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use zeroize::Zeroize;

use crate::error::Error;
use crate::params::{N, Q};

/// A polynomial with exactly `N` coefficients, each normalized to `[0, Q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    pub coeffs: [i16; N],
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Polynomial { coeffs: [0; N] }
    }

    /// The polynomial `1` (constant term 1, all else 0).
    pub fn one() -> Self {
        let mut p = Polynomial::zero();
        p.coeffs[0] = 1;
        p
    }

    pub fn from_coeffs(coeffs: [i16; N]) -> Self {
        let mut p = Polynomial { coeffs };
        for c in p.coeffs.iter_mut() {
            *c = (*c as i32).rem_euclid(Q) as i16;
        }
        p
    }

    pub fn from_slice(coeffs: &[i16]) -> Result<Self, Error> {
        if coeffs.len() != N {
            return Err(Error::InvalidArgument("polynomial needs exactly N coefficients"));
        }
        let mut arr = [0i16; N];
        arr.copy_from_slice(coeffs);
        Ok(Polynomial::from_coeffs(arr))
    }

    /// `mul_rq`: schoolbook product of length `2n-1`, folded back with the
    /// `x^n ≡ -1` reduction, then reduced mod q.
    pub fn mul_rq(&self, rhs: &Polynomial) -> Polynomial {
        let mut raw = [0i64; 2 * N - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if *a == 0 {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                raw[i + j] += *a as i64 * *b as i64;
            }
        }

        let mut folded = [0i64; N];
        for (i, term) in raw.iter().enumerate() {
            if i < N {
                folded[i] += term;
            } else {
                folded[i - N] -= term;
            }
        }

        let mut coeffs = [0i16; N];
        for (dst, src) in coeffs.iter_mut().zip(folded.iter()) {
            *dst = src.rem_euclid(Q as i64) as i16;
        }
        Polynomial { coeffs }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Self) -> Polynomial {
        let mut coeffs = [0i16; N];
        for i in 0..N {
            coeffs[i] = ((self.coeffs[i] as i32 + rhs.coeffs[i] as i32).rem_euclid(Q)) as i16;
        }
        Polynomial { coeffs }
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Self) -> Polynomial {
        let mut coeffs = [0i16; N];
        for i in 0..N {
            coeffs[i] = ((self.coeffs[i] as i32 - rhs.coeffs[i] as i32).rem_euclid(Q)) as i16;
        }
        Polynomial { coeffs }
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl Index<usize> for Polynomial {
    type Output = i16;
    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}

impl IndexMut<usize> for Polynomial {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coeffs[index]
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        for i in (0..N).rev() {
            let c = self.coeffs[i];
            if c == 0 {
                continue;
            }
            let mut term = String::new();
            if c != 1 || i == 0 {
                term.push_str(&c.to_string());
            }
            if i > 0 {
                if c != 1 {
                    term.push('*');
                }
                term.push('X');
                if i > 1 {
                    term.push_str(&format!("^{i}"));
                }
            }
            terms.push(term);
        }
        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

/// An ordered sequence of exactly `k` [`Polynomial`]s sharing modulus `Q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialVector {
    pub polys: Vec<Polynomial>,
}

impl PolynomialVector {
    pub fn zero(k: usize) -> Self {
        PolynomialVector {
            polys: (0..k).map(|_| Polynomial::zero()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.polys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    pub fn add(&self, rhs: &PolynomialVector) -> Result<PolynomialVector, Error> {
        if self.len() != rhs.len() {
            return Err(Error::InvalidArgument("vector length mismatch"));
        }
        Ok(PolynomialVector {
            polys: self
                .polys
                .iter()
                .zip(rhs.polys.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// `Σ a_i · b_i`, the inner product used throughout K-PKE.
    pub fn inner_product(&self, rhs: &PolynomialVector) -> Result<Polynomial, Error> {
        if self.len() != rhs.len() {
            return Err(Error::InvalidArgument("vector length mismatch"));
        }
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(rhs.polys.iter()) {
            acc = &acc + &a.mul_rq(b);
        }
        Ok(acc)
    }
}

impl Zeroize for PolynomialVector {
    fn zeroize(&mut self) {
        self.polys.iter_mut().for_each(|p| p.zeroize());
    }
}

/// A k×k array of [`Polynomial`]s, deterministically derived from a seed by
/// [`crate::sampling::expand`] and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub rows: Vec<Vec<Polynomial>>,
}

impl Matrix {
    pub fn k(&self) -> usize {
        self.rows.len()
    }

    /// `A · v` (matrix on the left).
    pub fn mul_vec(&self, v: &PolynomialVector) -> Result<PolynomialVector, Error> {
        if self.k() != v.len() {
            return Err(Error::InvalidArgument("matrix/vector dimension mismatch"));
        }
        let mut out = Vec::with_capacity(self.k());
        for row in &self.rows {
            let mut acc = Polynomial::zero();
            for (a_ij, v_j) in row.iter().zip(v.polys.iter()) {
                acc = &acc + &a_ij.mul_rq(v_j);
            }
            out.push(acc);
        }
        Ok(PolynomialVector { polys: out })
    }

    /// `A^T · v`.
    pub fn transpose_mul_vec(&self, v: &PolynomialVector) -> Result<PolynomialVector, Error> {
        if self.k() != v.len() {
            return Err(Error::InvalidArgument("matrix/vector dimension mismatch"));
        }
        let k = self.k();
        let mut out = Vec::with_capacity(k);
        for col in 0..k {
            let mut acc = Polynomial::zero();
            for row in 0..k {
                acc = &acc + &self.rows[row][col].mul_rq(&v.polys[row]);
            }
            out.push(acc);
        }
        Ok(PolynomialVector { polys: out })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i16]) -> Polynomial {
        let mut arr = [0i16; N];
        arr[..coeffs.len()].copy_from_slice(coeffs);
        Polynomial::from_coeffs(arr)
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let a = poly(&[1, 2, 3]);
        let b = poly(&[4, 5, 6, 7]);
        let c = poly(&[8]);
        assert_eq!((&a + &b), (&b + &a));
        assert_eq!((&(&a + &b) + &c), (&a + &(&b + &c)));
    }

    #[test]
    fn mul_distributes_over_add() {
        let a = poly(&[1, 2, 3]);
        let b = poly(&[4, 5, 6, 7]);
        let c = poly(&[8, 1, 9]);
        let lhs = a.mul_rq(&(&b + &c));
        let rhs = &a.mul_rq(&b) + &a.mul_rq(&c);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn mul_by_zero_and_one() {
        let a = poly(&[1, 2, 3, 4, 5]);
        assert_eq!(a.mul_rq(&Polynomial::zero()), Polynomial::zero());
        assert_eq!(a.mul_rq(&Polynomial::one()), a);
    }

    #[test]
    fn mul_rq_folds_high_degree_terms_with_negation() {
        // x^(N-1) * x = x^N = -1
        let mut hi = Polynomial::zero();
        hi.coeffs[N - 1] = 1;
        let x = {
            let mut p = Polynomial::zero();
            p.coeffs[1] = 1;
            p
        };
        let product = hi.mul_rq(&x);
        let mut expected = Polynomial::zero();
        expected.coeffs[0] = (Q - 1) as i16;
        assert_eq!(product, expected);
    }

    #[test]
    fn vector_inner_product_matches_elementwise_sum() {
        let v1 = PolynomialVector {
            polys: vec![poly(&[1, 1]), poly(&[2, 2])],
        };
        let v2 = PolynomialVector {
            polys: vec![poly(&[3]), poly(&[4])],
        };
        let got = v1.inner_product(&v2).unwrap();
        let expected = &v1.polys[0].mul_rq(&v2.polys[0]) + &v1.polys[1].mul_rq(&v2.polys[1]);
        assert_eq!(got, expected);
    }

    #[test]
    fn mismatched_lengths_error() {
        let v1 = PolynomialVector::zero(2);
        let v2 = PolynomialVector::zero(3);
        assert!(v1.add(&v2).is_err());
        assert!(v1.inner_product(&v2).is_err());
    }
}
