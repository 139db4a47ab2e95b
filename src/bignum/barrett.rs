use core::cmp::Ordering::Less;

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::BigNum;

/// Precomputed state for Barrett reduction modulo any nonzero `N`.
///
/// With `k` the bit length of `N`, the context holds `μ = ⌊2^(2k) / N⌋`,
/// an integer reciprocal that turns each later reduction into two shifts,
/// two multiplications and a short correction loop. Like the Montgomery
/// context this is derived once per modulus and reused.
#[derive(Clone, Debug)]
pub struct BarrettContext {
    modulus: BigNum,
    mu: BigNum,
    k: u64,
}

impl BarrettContext {
    /// Derives the context from a modulus, taken by magnitude.
    ///
    /// Fails with [`Error::InvalidModulus`] on zero.
    pub fn new(modulus: &BigNum) -> Result<BarrettContext> {
        if modulus.is_zero() {
            return Err(Error::InvalidModulus);
        }

        let modulus = modulus.abs();
        let k = modulus.bits();
        let mu = &(&BigNum::one() << (2 * k) as usize) / &modulus;

        Ok(BarrettContext { modulus, mu, k })
    }

    /// The modulus magnitude the context reduces by.
    #[inline]
    pub fn modulus(&self) -> &BigNum {
        &self.modulus
    }

    /// Reduces a non-negative `a`, typically a product of two residues, to
    /// `a mod N`.
    ///
    /// The estimated quotient `q = ((a >> (k-1)) · μ) >> (k+1)` undershoots
    /// the true quotient by at most two, so the trailing loop runs at most
    /// twice.
    pub fn reduce(&self, a: &BigNum) -> BigNum {
        if a.cmp_mag(&self.modulus) == Less {
            return a.abs();
        }
        if a.bits() <= self.k {
            return a.abs() % &self.modulus;
        }

        let q = &(&(a >> (self.k - 1) as usize) * &self.mu) >> (self.k + 1) as usize;

        let m = &BigNum::one() << (self.k + 1) as usize;
        let mask = &m - &BigNum::one();
        let r1 = a & &mask;
        let r2 = &(&q * &self.modulus) & &mask;

        let mut r = &r1 - &r2;
        if r.is_negative() {
            r += &m;
        }
        while r.cmp_mag(&self.modulus) != Less {
            r = &r - &self.modulus;
        }
        r
    }
}
