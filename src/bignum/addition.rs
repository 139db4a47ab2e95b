use core::cmp::Ordering::Less;
use core::ops::{Add, AddAssign};

use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::bignum::subtraction::sub_mag;
use crate::BigNum;

/// Two's-word add with carry: returns the low word of `a + b + *acc` and
/// leaves the carry in `*acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Adds two magnitudes.
///
/// Walks both slices in parallel with a carry in `[0, 1]`, emitting the low
/// 64 bits of each 65-bit intermediate, and stops only once both inputs are
/// exhausted and the carry has died out.
pub fn add_mag(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(longer.len() + 1);
    let mut carry: DoubleBigDigit = 0;
    for (i, &x) in longer.iter().enumerate() {
        let y = shorter.get(i).copied().unwrap_or(0);
        sum.push(adc(x, y, &mut carry));
    }
    if carry != 0 {
        sum.push(carry as BigDigit);
    }
    sum
}

impl Add<&BigNum> for &BigNum {
    type Output = BigNum;

    fn add(self, other: &BigNum) -> BigNum {
        if self.negative == other.negative {
            return BigNum::new(add_mag(&self.digits, &other.digits), self.negative);
        }

        // Opposite signs: subtract the smaller magnitude from the larger
        // and keep the larger operand's sign.
        if self.cmp_mag(other) == Less {
            BigNum::new(sub_mag(&other.digits, &self.digits), other.negative)
        } else {
            BigNum::new(sub_mag(&self.digits, &other.digits), self.negative)
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigNum, add);
forward_binop_assign!(impl AddAssign for BigNum, add_assign, Add, add);
