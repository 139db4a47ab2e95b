use core::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::BigNum;

/// Operand length (in digits) at which multiplication switches from the
/// schoolbook routine to Karatsuba.
pub(crate) const KARATSUBA_THRESHOLD: usize = 8;

/// Multiply-accumulate with carry: returns the low word of
/// `a + b * c + *acc` and leaves the carry in `*acc`.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b) * DoubleBigDigit::from(c);
    let lo = *acc as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Schoolbook magnitude multiplication, O(m·n).
///
/// Each partial product is 128 bits wide; the row carry keeps moving past
/// the end of the inner loop until it dies out. The result has `m + n`
/// words before normalization.
pub fn mul_schoolbook(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let mut prod = vec![0; a.len() + b.len()];

    for (i, &ai) in a.iter().enumerate() {
        let mut carry: DoubleBigDigit = 0;
        for (j, &bj) in b.iter().enumerate() {
            prod[i + j] = mac_with_carry(prod[i + j], ai, bj, &mut carry);
        }

        // The row's carry can ripple through words deposited by earlier
        // rows, but never past the m+n'th word.
        let mut j = i + b.len();
        while carry != 0 {
            let t = DoubleBigDigit::from(prod[j]) + carry;
            prod[j] = t as BigDigit;
            carry = t >> big_digit::BITS;
            j += 1;
        }
    }

    prod
}

/// Magnitude multiplication, dispatching on operand size.
pub fn mul_mag(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    if a.len().max(b.len()) >= KARATSUBA_THRESHOLD {
        mul_karatsuba(a, b)
    } else {
        mul_schoolbook(a, b)
    }
}

/// Karatsuba multiplication: three half-size products instead of four.
///
/// Both operands are padded to a common even word count `n` and split at
/// `half = n / 2`, then `z1 = (a0 + a1)(b0 + b1) - z0 - z2` and the result
/// is assembled as `z2·B^n + z1·B^half + z0`. Recursion flows back through
/// [`mul_mag`], so the base case is schoolbook.
fn mul_karatsuba(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let mut n = a.len().max(b.len());
    if n % 2 != 0 {
        n += 1;
    }
    let half = n / 2;

    let low = |d: &[BigDigit]| BigNum::from_vec(d[..half.min(d.len())].to_vec());
    let high = |d: &[BigDigit]| {
        if d.len() > half {
            BigNum::from_vec(d[half..].to_vec())
        } else {
            BigNum::zero()
        }
    };

    let (a0, a1) = (low(a), high(a));
    let (b0, b1) = (low(b), high(b));

    let z0 = BigNum::from_vec(mul_mag(&a0.digits, &b0.digits));
    let z2 = BigNum::from_vec(mul_mag(&a1.digits, &b1.digits));

    let sa = &a0 + &a1;
    let sb = &b0 + &b1;
    let z1 = &BigNum::from_vec(mul_mag(&sa.digits, &sb.digits)) - &z2 - &z0;

    let mut result = z0;
    result += &z1 << (half * big_digit::BITS as usize);
    result += &z2 << (n * big_digit::BITS as usize);
    result.digits
}

impl Mul<&BigNum> for &BigNum {
    type Output = BigNum;

    fn mul(self, other: &BigNum) -> BigNum {
        BigNum::new(
            mul_mag(&self.digits, &other.digits),
            self.negative ^ other.negative,
        )
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigNum, mul);
forward_binop_assign!(impl MulAssign for BigNum, mul_assign, Mul, mul);
