use num_traits::{One, Zero};

use crate::algorithms::xgcd;
use crate::error::{Error, Result};
use crate::BigNum;

/// Reduces `x` into `[0, m)` for a non-negative modulus `m`.
///
/// Unlike `%`, which keeps the dividend's sign, this always lands in the
/// canonical residue class.
pub(crate) fn mod_floor(x: &BigNum, m: &BigNum) -> BigNum {
    debug_assert!(!m.is_negative());
    let r = x % m;
    if r.is_negative() {
        r + m
    } else {
        r
    }
}

/// The multiplicative inverse of `a` modulo `m`, in `[0, |m|)`.
///
/// Fails with [`Error::NotInvertible`] when `gcd(a, m) != 1` and with
/// [`Error::InvalidModulus`] on a zero modulus.
pub fn mod_inverse(a: &BigNum, m: &BigNum) -> Result<BigNum> {
    let modulus = m.abs();
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }

    let (g, s, _) = xgcd(a, &modulus, true);
    if !g.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(mod_floor(&s.unwrap(), &modulus))
}

impl BigNum {
    /// The multiplicative inverse of `self` modulo `modulus`, in
    /// `[0, |modulus|)`. See [`mod_inverse`].
    #[inline]
    pub fn mod_inverse(&self, modulus: &BigNum) -> Result<BigNum> {
        mod_inverse(self, modulus)
    }
}
