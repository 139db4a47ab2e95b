//! Probabilistic primality testing.

#![cfg(feature = "prime")]
#![cfg_attr(docsrs, doc(cfg(feature = "prime")))]

use num_traits::One;
use rand::Rng;

use crate::bigrand::RandBigNum;
use crate::BigNum;

/// Miller–Rabin compositeness test with `rounds` random witnesses.
///
/// Writes `n - 1 = d · 2^r` with `d` odd, then for each witness `a` drawn
/// uniformly from `[2, n-2]` checks whether `a^d`, or one of its first
/// `r - 1` squarings, reaches `n - 1` (or `a^d` is already `1`) modulo
/// `n`. Any witness that never does proves `n` composite; a reported prime
/// is wrong with probability at most `4^-rounds`.
///
/// Values below two and even values above two are settled without drawing
/// witnesses, as are 2 and 3 themselves, whose witness range is empty.
pub fn probably_prime<R: Rng + ?Sized>(rng: &mut R, n: &BigNum, rounds: usize) -> bool {
    let one = BigNum::one();
    let two = BigNum::from(2u64);

    if *n <= one {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }
    let n_minus_1 = n - &one;
    if *n == BigNum::from(3u64) {
        return true;
    }

    // n - 1 = d * 2^r with d odd; r >= 1 because n is odd.
    let mut d = &n_minus_1 >> 1;
    let mut r = 1u64;
    while d.is_even() {
        d = &d >> 1;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_bignum_range(&two, &n_minus_1);

        let mut x = a.mod_pow(&d, n).expect("modulus is nonzero");
        if x == one || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 1..r {
            x = &(&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

impl BigNum {
    /// Miller–Rabin primality test with `rounds` witnesses drawn from
    /// [`rand::rng`]. See [`probably_prime`] for the failure probability,
    /// and use it directly to control the randomness source.
    pub fn is_probable_prime(&self, rounds: usize) -> bool {
        probably_prime(&mut rand::rng(), self, rounds)
    }
}
