use core::cmp::Ordering::{Greater, Less};
use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::Zero;

use crate::big_digit::BITS;
use crate::error::{Error, Result};
use crate::BigNum;

/// Binary long division of magnitudes. Both operands are taken as
/// non-negative and the divisor is nonzero.
///
/// Positions the divisor at the highest `s` with `b·2^s <= a`, then walks
/// `s` down to zero, subtracting the shifted divisor and setting quotient
/// bit `s` whenever the running remainder dominates.
fn div_rem_mag(a: &BigNum, b: &BigNum) -> (BigNum, BigNum) {
    if a.cmp_mag(b) == Less {
        return (BigNum::zero(), a.abs());
    }

    let mut remainder = a.abs();
    let mut s = a.bits() - b.bits();
    let mut shifted = &b.abs() << s as usize;
    if shifted.cmp_mag(&remainder) == Greater {
        shifted = &shifted >> 1;
        s -= 1;
    }

    let mut quotient = vec![0u64; s as usize / BITS as usize + 1];
    loop {
        if remainder.cmp_mag(&shifted) != Less {
            remainder = &remainder - &shifted;
            quotient[s as usize / BITS as usize] |= 1 << (s % u64::from(BITS));
        }
        if s == 0 {
            break;
        }
        shifted = &shifted >> 1;
        s -= 1;
    }

    (BigNum::from_vec(quotient), remainder)
}

impl BigNum {
    /// Simultaneous truncated quotient and remainder.
    ///
    /// The quotient's sign is the XOR of the operand signs; the remainder
    /// takes the dividend's sign and satisfies
    /// `self == quotient * divisor + remainder` with
    /// `|remainder| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (q_mag, r_mag) = div_rem_mag(self, divisor);
        let quotient = BigNum::new(q_mag.digits, self.negative ^ divisor.negative);
        let remainder = BigNum::new(r_mag.digits, self.negative);
        Ok((quotient, remainder))
    }
}

impl Div<&BigNum> for &BigNum {
    type Output = BigNum;

    /// # Panics
    ///
    /// Panics when `other` is zero; use [`BigNum::div_rem`] for the
    /// fallible form.
    fn div(self, other: &BigNum) -> BigNum {
        let (q, _) = self.div_rem(other).expect("division by zero");
        q
    }
}

impl Rem<&BigNum> for &BigNum {
    type Output = BigNum;

    /// # Panics
    ///
    /// Panics when `other` is zero; use [`BigNum::div_rem`] for the
    /// fallible form.
    fn rem(self, other: &BigNum) -> BigNum {
        let (_, r) = self.div_rem(other).expect("division by zero");
        r
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigNum, div);
forward_all_binop_to_ref_ref!(impl Rem for BigNum, rem);
forward_binop_assign!(impl DivAssign for BigNum, div_assign, Div, div);
forward_binop_assign!(impl RemAssign for BigNum, rem_assign, Rem, rem);

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::bigrand::RandBigNum;
    use crate::{BigNum, Error};

    fn hex(s: &str) -> BigNum {
        BigNum::from_hex(s).unwrap()
    }

    #[test]
    fn small_quotients_and_remainders() {
        assert_eq!((hex("64") / hex("1e")).to_hex(), "3");
        assert_eq!((hex("64") % hex("1e")).to_hex(), "a");
        assert_eq!((hex("2a") / hex("2a")).to_hex(), "1");
        assert_eq!((hex("2a") % hex("2a")).to_hex(), "0");
        assert_eq!((hex("32") / hex("64")).to_hex(), "0");
        assert_eq!((hex("32") % hex("64")).to_hex(), "32");
        assert_eq!((hex("12345600") / hex("100")).to_hex(), "123456");
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!((hex("-7") / hex("2")).to_hex(), "-3");
        assert_eq!((hex("-7") % hex("2")).to_hex(), "-1");
        assert_eq!((hex("7") / hex("-2")).to_hex(), "-3");
        assert_eq!((hex("7") % hex("-2")).to_hex(), "1");
        assert_eq!((hex("-7") / hex("-2")).to_hex(), "3");
        assert_eq!((hex("-7") % hex("-2")).to_hex(), "-1");
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(
            hex("2a").div_rem(&BigNum::zero()).unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn division_identity_on_random_operands() {
        let mut rng = XorShiftRng::from_seed([11u8; 16]);
        for (abits, bbits) in [(64u64, 3u64), (192, 64), (1024, 130), (700, 699)] {
            let a = rng.gen_bignum(abits);
            let b = rng.gen_bignum(bbits);

            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&(&q * &b) + &r, a);
            assert!(r.cmp_mag(&b) == core::cmp::Ordering::Less);

            let neg_a = -&a;
            let (q2, r2) = neg_a.div_rem(&b).unwrap();
            assert_eq!(q2, -&q);
            assert!(r2.is_zero() || r2.is_negative());
        }
    }
}
