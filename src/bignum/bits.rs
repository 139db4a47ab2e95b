//! Bitwise combination of magnitudes.
//!
//! These operators deliberately ignore the sign: both operands contribute
//! their magnitude, padded with zero words to the longer length, and the
//! result is always non-negative. Sign-extending two's-complement semantics
//! would make results depend on an unbounded bit width, so it is not
//! offered.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::big_digit::BigDigit;
use crate::BigNum;

fn combine_mag(a: &[BigDigit], b: &[BigDigit], f: impl Fn(BigDigit, BigDigit) -> BigDigit) -> Vec<BigDigit> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            f(x, y)
        })
        .collect()
}

impl BitAnd<&BigNum> for &BigNum {
    type Output = BigNum;

    fn bitand(self, other: &BigNum) -> BigNum {
        BigNum::from_vec(combine_mag(&self.digits, &other.digits, |x, y| x & y))
    }
}

impl BitOr<&BigNum> for &BigNum {
    type Output = BigNum;

    fn bitor(self, other: &BigNum) -> BigNum {
        BigNum::from_vec(combine_mag(&self.digits, &other.digits, |x, y| x | y))
    }
}

impl BitXor<&BigNum> for &BigNum {
    type Output = BigNum;

    fn bitxor(self, other: &BigNum) -> BigNum {
        BigNum::from_vec(combine_mag(&self.digits, &other.digits, |x, y| x ^ y))
    }
}

forward_all_binop_to_ref_ref!(impl BitAnd for BigNum, bitand);
forward_all_binop_to_ref_ref!(impl BitOr for BigNum, bitor);
forward_all_binop_to_ref_ref!(impl BitXor for BigNum, bitxor);
forward_binop_assign!(impl BitAndAssign for BigNum, bitand_assign, BitAnd, bitand);
forward_binop_assign!(impl BitOrAssign for BigNum, bitor_assign, BitOr, bitor);
forward_binop_assign!(impl BitXorAssign for BigNum, bitxor_assign, BitXor, bitxor);
