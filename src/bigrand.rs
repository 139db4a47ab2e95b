//! Randomization of big integers
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use num_integer::Integer;
use rand::prelude::*;

use num_traits::Zero;

use crate::big_digit::BigDigit;
use crate::BigNum;

#[cfg(feature = "prime")]
use num_traits::One;

#[cfg(feature = "prime")]
use crate::error::{Error, Result};
#[cfg(feature = "prime")]
use crate::prime::probably_prime;

/// A trait for sampling random [`BigNum`]s, implemented for every
/// [`Rng`].
///
/// The `rand` feature must be enabled to use this. See crate-level
/// documentation for details.
pub trait RandBigNum {
    /// Generate a random non-negative [`BigNum`] of exactly the given bit
    /// length: the top bit is always set, so `result.bits() == bit_size`.
    /// A zero bit size yields zero.
    fn gen_bignum(&mut self, bit_size: u64) -> BigNum;

    /// Generate a random [`BigNum`] below the given bound, by rejection
    /// sampling. Panics when the bound is not positive.
    fn gen_bignum_below(&mut self, bound: &BigNum) -> BigNum;

    /// Generate a random [`BigNum`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Panics when the
    /// upper bound is not greater than the lower bound.
    fn gen_bignum_range(&mut self, lbound: &BigNum, ubound: &BigNum) -> BigNum;
}

/// Uniform digits with the excess high bits of the top word cleared, so
/// the value has at most `bit_size` bits.
fn gen_digits<R: Rng + ?Sized>(rng: &mut R, bit_size: u64) -> Vec<BigDigit> {
    let (words, rem) = bit_size.div_rem(&64);
    let len = (words + (rem > 0) as u64) as usize;
    let mut data = vec![0 as BigDigit; len];
    rng.fill(&mut data[..]);
    if rem > 0 {
        let last = len - 1;
        data[last] >>= 64 - rem;
    }
    data
}

impl<R: Rng + ?Sized> RandBigNum for R {
    fn gen_bignum(&mut self, bit_size: u64) -> BigNum {
        if bit_size == 0 {
            return BigNum::zero();
        }
        let mut data = gen_digits(self, bit_size);
        // Pin the top bit so the bit length is exact.
        let top_bits = match bit_size % 64 {
            0 => 64,
            rem => rem,
        };
        let last = data.len() - 1;
        data[last] |= 1 << (top_bits - 1);
        BigNum::from_vec(data)
    }

    fn gen_bignum_below(&mut self, bound: &BigNum) -> BigNum {
        assert!(!bound.is_zero() && !bound.is_negative());
        let bits = bound.bits();
        loop {
            let n = BigNum::from_vec(gen_digits(self, bits));
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_bignum_range(&mut self, lbound: &BigNum, ubound: &BigNum) -> BigNum {
        assert!(lbound < ubound);
        if lbound.is_zero() {
            self.gen_bignum_below(ubound)
        } else {
            lbound + self.gen_bignum_below(&(ubound - lbound))
        }
    }
}

/// A generic trait for generating random primes, implemented for every
/// [`Rng`].
///
/// *Warning*: the quality of the generated primes is entirely dependent on
/// the provided random number generator; pass a CSPRNG when the primes
/// guard anything.
///
/// # Example
///
/// ```
/// use bignum::RandPrime;
///
/// let p = rand::rng().gen_prime(256).unwrap();
/// assert_eq!(p.bits(), 256);
/// ```
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub trait RandPrime {
    /// Generate a random prime with exactly the given number of bits,
    /// testing candidates with 20 Miller–Rabin rounds.
    ///
    /// Fails with [`Error::PrimeSearchExhausted`] once the attempt budget
    /// of `50 * bit_size` candidates runs out.
    ///
    /// # Panics
    ///
    /// Panics when `bit_size < 2`; there are no one-bit primes.
    fn gen_prime(&mut self, bit_size: u64) -> Result<BigNum>;
}

#[cfg(feature = "prime")]
const PRIME_TEST_ROUNDS: usize = 20;

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: u64) -> Result<BigNum> {
        assert!(bit_size >= 2, "prime size must be at least 2-bit");

        // The two- and three-bit ranges each hold so few primes that
        // sampling is pointless.
        if bit_size == 2 {
            return Ok(BigNum::from(2u64));
        }
        if bit_size == 3 {
            return Ok(BigNum::from(if self.random() { 5u64 } else { 7u64 }));
        }

        let max_attempts = 50 * bit_size;
        for _ in 0..max_attempts {
            // Exact bit length, and odd: an even candidate this large
            // certainly isn't prime. Setting the low bit cannot carry,
            // since it is only set when clear.
            let mut candidate = self.gen_bignum(bit_size);
            if candidate.is_even() {
                candidate += BigNum::one();
            }

            if probably_prime(self, &candidate, PRIME_TEST_ROUNDS) {
                return Ok(candidate);
            }

            // One more try at the next odd number before resampling; +2
            // can push the value past the requested bit length.
            candidate += BigNum::from(2u64);
            if candidate.bits() == bit_size && probably_prime(self, &candidate, PRIME_TEST_ROUNDS) {
                return Ok(candidate);
            }
        }

        Err(Error::PrimeSearchExhausted)
    }
}
