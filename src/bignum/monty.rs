use core::cmp::Ordering::Less;

use num_traits::{One, Zero};

use crate::algorithms::{mod_floor, xgcd};
use crate::big_digit::{self, DoubleBigDigit};
use crate::bignum::multiplication::mac_with_carry;
use crate::error::{Error, Result};
use crate::BigNum;

/// Precomputed state for Montgomery reduction modulo an odd `N`.
///
/// With `k` the digit count of `N` and `R = 2^(64k)`, the context holds
/// `R⁻¹ mod N` and `N′ = (-N⁻¹) mod R`, both obtained from the extended
/// Euclidean algorithm. Deriving the context costs a few divisions, so it
/// pays off when many reductions share one modulus, as in an
/// exponentiation loop. The context is immutable and must be rebuilt for a
/// different modulus.
#[derive(Clone, Debug)]
pub struct MontgomeryContext {
    modulus: BigNum,
    r: BigNum,
    r_inv: BigNum,
    n_prime: BigNum,
    k: usize,
}

impl MontgomeryContext {
    /// Derives the context from a modulus, taken by magnitude.
    ///
    /// Fails with [`Error::InvalidModulus`] when the modulus is zero or
    /// even; `R` and an even `N` share a factor of two, so no `R⁻¹` exists.
    pub fn new(modulus: &BigNum) -> Result<MontgomeryContext> {
        if modulus.is_zero() || modulus.is_even() {
            return Err(Error::InvalidModulus);
        }

        let modulus = modulus.abs();
        let k = modulus.digits().len();
        let r = &BigNum::one() << (k * big_digit::BITS as usize);

        let (g, s, _) = xgcd(&r, &modulus, true);
        if !g.is_one() {
            return Err(Error::InvalidModulus);
        }
        let r_inv = mod_floor(&s.unwrap(), &modulus);

        let (g, s, _) = xgcd(&modulus, &r, true);
        if !g.is_one() {
            return Err(Error::InvalidModulus);
        }
        let n_prime = mod_floor(&-s.unwrap(), &r);

        Ok(MontgomeryContext {
            modulus,
            r,
            r_inv,
            n_prime,
            k,
        })
    }

    /// The modulus magnitude the context reduces by.
    #[inline]
    pub fn modulus(&self) -> &BigNum {
        &self.modulus
    }

    /// `R = 2^(64k)`, the Montgomery radix for this modulus.
    #[inline]
    pub fn radix(&self) -> &BigNum {
        &self.r
    }

    /// `R⁻¹ mod N`.
    #[inline]
    pub fn radix_inv(&self) -> &BigNum {
        &self.r_inv
    }

    /// `N′ = (-N⁻¹) mod R`.
    #[inline]
    pub fn n_prime(&self) -> &BigNum {
        &self.n_prime
    }

    /// Montgomery reduction: maps `a < N·R` to `a·R⁻¹ mod N`.
    ///
    /// CIOS scheduling over an accumulator of `2k+1` words: each round
    /// zeroes one low word by adding `m·N·B^i` with
    /// `m = T[i]·N′[0] mod 2⁶⁴`, rippling the carry across the remaining
    /// width. The top `k+1` words then hold a value below `2N`, so at most
    /// one final subtraction is needed.
    pub fn reduce(&self, a: &BigNum) -> BigNum {
        let k = self.k;
        let mut t = vec![0; 2 * k + 1];
        for (slot, &digit) in t.iter_mut().zip(a.digits().iter().take(2 * k)) {
            *slot = digit;
        }

        let n0 = self.n_prime.digits()[0];
        let n_digits = self.modulus.digits();

        for i in 0..k {
            let m = t[i].wrapping_mul(n0);

            let mut carry: DoubleBigDigit = 0;
            for (j, &nj) in n_digits.iter().enumerate() {
                t[i + j] = mac_with_carry(t[i + j], m, nj, &mut carry);
            }
            for slot in &mut t[i + k..] {
                if carry == 0 {
                    break;
                }
                let sum = DoubleBigDigit::from(*slot) + carry;
                *slot = sum as u64;
                carry = sum >> big_digit::BITS;
            }
        }

        let mut result = BigNum::from_vec(t[k..].to_vec());
        if result.cmp_mag(&self.modulus) != Less {
            result = &result - &self.modulus;
        }
        result
    }

    /// Converts into Montgomery form: `a·R mod N`.
    pub fn to_montgomery(&self, a: &BigNum) -> BigNum {
        mod_floor(&(a * &self.r), &self.modulus)
    }

    /// Converts out of Montgomery form: `a·R⁻¹ mod N`.
    #[inline]
    pub fn from_montgomery(&self, a: &BigNum) -> BigNum {
        self.reduce(a)
    }

    /// Multiplies two values in Montgomery form, staying in form.
    pub fn multiply(&self, a: &BigNum, b: &BigNum) -> BigNum {
        self.reduce(&(a * b))
    }
}
