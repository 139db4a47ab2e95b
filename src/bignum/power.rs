use num_traits::{One, Zero};

use crate::algorithms::mod_floor;
use crate::bignum::barrett::BarrettContext;
use crate::bignum::monty::MontgomeryContext;
use crate::error::{Error, Result};
use crate::BigNum;

/// Modulus digit count at which `mod_pow` reaches for Montgomery form
/// (odd moduli only).
pub(crate) const MONTGOMERY_THRESHOLD: usize = 4;

/// Modulus digit count at which the non-Montgomery path reaches for
/// Barrett reduction.
pub(crate) const BARRETT_THRESHOLD: usize = 8;

impl BigNum {
    /// Modular exponentiation: `self^exponent mod modulus`, in
    /// `[0, |modulus|)`.
    ///
    /// The base is reduced into the canonical residue class first, so a
    /// negative base is fine. The exponent is taken by magnitude and the
    /// modulus by magnitude; a zero modulus is [`Error::InvalidModulus`].
    ///
    /// Internally the modulus picks its accelerator: large odd moduli run
    /// in Montgomery form, large even ones under Barrett reduction, and
    /// small ones through plain binary exponentiation. A context that
    /// fails to build only costs the fallback to the next path; the result
    /// never depends on which path ran.
    pub fn mod_pow(&self, exponent: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        if modulus.is_zero() {
            return Err(Error::InvalidModulus);
        }
        let modulus = modulus.abs();

        if exponent.is_zero() {
            return Ok(BigNum::one());
        }
        if modulus.is_one() {
            return Ok(BigNum::zero());
        }

        let base = mod_floor(self, &modulus);

        if modulus.digits().len() >= MONTGOMERY_THRESHOLD && modulus.is_odd() {
            if let Ok(ctx) = MontgomeryContext::new(&modulus) {
                return Ok(mod_pow_montgomery(&base, exponent, &ctx));
            }
        }

        Ok(mod_pow_binary(&base, exponent, &modulus))
    }
}

/// Right-to-left binary exponentiation with every multiplication done in
/// Montgomery form.
fn mod_pow_montgomery(base: &BigNum, exponent: &BigNum, ctx: &MontgomeryContext) -> BigNum {
    let mut result = ctx.to_montgomery(&BigNum::one());
    let mut base = ctx.to_montgomery(base);
    let mut exp = exponent.abs();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = ctx.multiply(&result, &base);
        }
        base = ctx.multiply(&base, &base);
        exp = &exp >> 1;
    }

    ctx.from_montgomery(&result)
}

/// Binary exponentiation reducing after each multiplication, through a
/// Barrett context when the modulus is large enough for the precomputation
/// to pay for itself and plain `%` otherwise.
fn mod_pow_binary(base: &BigNum, exponent: &BigNum, modulus: &BigNum) -> BigNum {
    if modulus.digits().len() >= BARRETT_THRESHOLD {
        if let Ok(ctx) = BarrettContext::new(modulus) {
            let mut result = BigNum::one();
            let mut base = base.clone();
            let mut exp = exponent.abs();

            while !exp.is_zero() {
                if exp.is_odd() {
                    result = ctx.reduce(&(&result * &base));
                }
                base = ctx.reduce(&(&base * &base));
                exp = &exp >> 1;
            }

            return result;
        }
    }

    let mut result = BigNum::one();
    let mut base = base.clone();
    let mut exp = exponent.abs();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = &(&result * &base) % modulus;
        }
        base = &(&base * &base) % modulus;
        exp = &exp >> 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::{mod_pow_binary, mod_pow_montgomery};
    use crate::algorithms::mod_floor;
    use crate::bigrand::RandBigNum;
    use crate::{BigNum, Error, MontgomeryContext};

    fn hex(s: &str) -> BigNum {
        BigNum::from_hex(s).unwrap()
    }

    #[test]
    fn two_to_the_tenth_mod_1000() {
        let r = hex("2").mod_pow(&hex("a"), &hex("3e8")).unwrap();
        assert_eq!(r.to_hex(), "18");
    }

    #[test]
    fn degenerate_cases() {
        assert_eq!(
            hex("2").mod_pow(&hex("a"), &hex("0")).unwrap_err(),
            Error::InvalidModulus
        );
        assert!(hex("7").mod_pow(&hex("0"), &hex("b")).unwrap().is_one());
        assert!(hex("7").mod_pow(&hex("5"), &hex("1")).unwrap().is_zero());
        assert!(hex("0").mod_pow(&hex("5"), &hex("b")).unwrap().is_zero());
    }

    #[test]
    fn negative_base_reduces_first() {
        // (-2)^3 mod 11 = -8 mod 11 = 3
        let r = hex("-2").mod_pow(&hex("3"), &hex("b")).unwrap();
        assert_eq!(r.to_hex(), "3");
        assert!(!r.is_negative());
    }

    #[test]
    fn large_even_modulus_takes_the_barrett_path() {
        // 2^512 is even and nine digits wide, past the Barrett threshold.
        let n = &BigNum::one() << 512;
        let r = hex("3").mod_pow(&hex("100"), &n).unwrap();
        let expected = mod_floor(&naive_pow(&hex("3"), 0x100, &n), &n);
        assert_eq!(r, expected);
    }

    fn naive_pow(base: &BigNum, exp: u64, modulus: &BigNum) -> BigNum {
        let mut acc = BigNum::one();
        for _ in 0..exp {
            acc = &(&acc * base) % modulus;
        }
        acc
    }

    #[test]
    fn all_three_paths_agree() {
        let mut rng = XorShiftRng::from_seed([19u8; 16]);
        for bits in [256u64, 300, 520] {
            let mut n = rng.gen_bignum(bits);
            if n.is_even() {
                n += BigNum::one();
            }
            let base = rng.gen_bignum_below(&n);
            let exp = rng.gen_bignum(48);

            let reduced = mod_floor(&base, &n);
            let ctx = MontgomeryContext::new(&n).unwrap();
            let via_montgomery = mod_pow_montgomery(&reduced, &exp, &ctx);
            let via_binary = mod_pow_binary(&reduced, &exp, &n);
            let via_dispatch = base.mod_pow(&exp, &n).unwrap();

            assert_eq!(via_montgomery, via_binary, "modulus {}", n);
            assert_eq!(via_dispatch, via_montgomery, "modulus {}", n);
        }
    }

    #[test]
    fn matches_a_naive_power_loop() {
        let mut rng = XorShiftRng::from_seed([21u8; 16]);
        let n = rng.gen_bignum(96);
        let base = rng.gen_bignum_below(&n);
        for exp in [0u64, 1, 2, 3, 17, 64, 100] {
            let got = base.mod_pow(&BigNum::from(exp), &n).unwrap();
            assert_eq!(got, naive_pow(&base, exp, &n), "exp {}", exp);
        }
    }
}
