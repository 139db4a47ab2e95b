use core::mem;

use num_traits::{One, Zero};

use crate::BigNum;

/// XGCD computes the greatest common divisor of `a` and `b`, which is
/// always non-negative, and, when `extended` is true, Bézout coefficients
/// `x` and `y` with `a*x + b*y = gcd`.
///
/// Inputs may be zero or negative:
/// if `a == b == 0`, the result is `(0, 0, 0)`;
/// if only one input is zero, the gcd is the other's magnitude and the
/// corresponding coefficient is `sign(input) * 1`.
pub fn xgcd(a_in: &BigNum, b_in: &BigNum, extended: bool) -> (BigNum, Option<BigNum>, Option<BigNum>) {
    // Two-row recurrence on the magnitudes; signs are restored at the end.
    let mut old_r = a_in.abs();
    let mut r = b_in.abs();
    let (mut old_s, mut s) = (BigNum::one(), BigNum::zero());
    let (mut old_t, mut t) = (BigNum::zero(), BigNum::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &(&q * &r);
        old_r = mem::replace(&mut r, next_r);

        if extended {
            let next_s = &old_s - &(&q * &s);
            old_s = mem::replace(&mut s, next_s);

            let next_t = &old_t - &(&q * &t);
            old_t = mem::replace(&mut t, next_t);
        }
    }

    if !extended {
        return (old_r, None, None);
    }

    // old_r == |a|*old_s + |b|*old_t; flip each coefficient whose input
    // was negative so the identity holds for the signed inputs.
    if a_in.is_negative() {
        old_s = -old_s;
    }
    if b_in.is_negative() {
        old_t = -old_t;
    }

    (old_r, Some(old_s), Some(old_t))
}

impl BigNum {
    /// The greatest common divisor of the magnitudes, always non-negative.
    /// `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &BigNum) -> BigNum {
        let (g, _, _) = xgcd(self, other, false);
        g
    }

    /// Extended Euclidean algorithm: `(g, s, t)` with
    /// `self * s + other * t == g` and `g == gcd(self, other) >= 0`.
    pub fn extended_gcd(&self, other: &BigNum) -> (BigNum, BigNum, BigNum) {
        let (g, s, t) = xgcd(self, other, true);
        (g, s.unwrap(), t.unwrap())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::xgcd;
    use crate::bigrand::RandBigNum;
    use crate::BigNum;

    fn hex(s: &str) -> BigNum {
        BigNum::from_hex(s).unwrap()
    }

    #[test]
    fn gcd_of_small_values() {
        assert_eq!(hex("30").gcd(&hex("12")).to_hex(), "6");
        assert_eq!(hex("11").gcd(&hex("d")).to_hex(), "1");
        assert_eq!(hex("2a").gcd(&hex("0")).to_hex(), "2a");
        assert_eq!(hex("0").gcd(&hex("2a")).to_hex(), "2a");
        assert_eq!(hex("0").gcd(&hex("0")).to_hex(), "0");
    }

    #[test]
    fn gcd_ignores_signs() {
        assert_eq!(hex("-30").gcd(&hex("12")).to_hex(), "6");
        assert_eq!(hex("30").gcd(&hex("-12")).to_hex(), "6");
        assert_eq!(hex("-30").gcd(&hex("-12")).to_hex(), "6");
    }

    #[test]
    fn extended_gcd_small_example() {
        // gcd(240, 46) = 2 = 240*(-9) + 46*47
        let (g, s, t) = BigNum::from(240i64).extended_gcd(&BigNum::from(46i64));
        assert_eq!(g, BigNum::from(2i64));
        assert_eq!(s, BigNum::from(-9i64));
        assert_eq!(t, BigNum::from(47i64));
    }

    #[test]
    fn non_extended_returns_no_coefficients() {
        let (g, s, t) = xgcd(&hex("f0"), &hex("2e"), false);
        assert_eq!(g, BigNum::from(2i64));
        assert_eq!(s, None);
        assert_eq!(t, None);
    }

    #[test]
    fn bezout_identity_with_signed_inputs() {
        let cases = [
            ("7", "0", "7"),
            ("-7", "0", "7"),
            ("0", "b", "b"),
            ("0", "-b", "b"),
            ("-30", "12", "6"),
            ("30", "-12", "6"),
            ("-21b49ae6", "10b6e2dd0", "2"),
        ];
        for (a, b, g) in cases {
            let a = BigNum::from_str(a).unwrap();
            let b = BigNum::from_str(b).unwrap();
            let (got_g, s, t) = a.extended_gcd(&b);
            assert_eq!(got_g, BigNum::from_str(g).unwrap(), "gcd({}, {})", a, b);
            assert_eq!(&(&a * &s) + &(&b * &t), got_g, "bezout({}, {})", a, b);
        }
    }

    #[test]
    fn gcd_divides_both_operands_and_bezout_holds() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for bits in [8u64, 64, 200, 512] {
            let a = rng.gen_bignum(bits);
            let b = rng.gen_bignum(bits / 2 + 1);

            let (g, s, t) = a.extended_gcd(&b);
            assert!((&a % &g).is_zero());
            assert!((&b % &g).is_zero());
            assert_eq!(&(&a * &s) + &(&b * &t), g);
        }
    }
}
