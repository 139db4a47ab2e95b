use core::cmp::Ordering::Less;
use core::ops::{Sub, SubAssign};

use crate::big_digit::BigDigit;
use crate::bignum::addition::add_mag;
use crate::BigNum;

/// Subtract with borrow: returns `a - b - *borrow` and leaves the new
/// borrow, `0` or `1`, in `*borrow`.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
    let (d, b1) = a.overflowing_sub(b);
    let (d, b2) = d.overflowing_sub(*borrow);
    *borrow = BigDigit::from(b1 || b2);
    d
}

/// Subtracts magnitude `b` from magnitude `a`.
///
/// Requires `a >= b`; the caller compares magnitudes first. Walks `a` with
/// a borrow in `[0, 1]`.
pub fn sub_mag(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    debug_assert!(crate::bignum::cmp_slice(a, b) != Less);

    let mut diff = Vec::with_capacity(a.len());
    let mut borrow: BigDigit = 0;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        diff.push(sbb(x, y, &mut borrow));
    }
    debug_assert_eq!(borrow, 0, "sub_mag caller must ensure a >= b");
    diff
}

impl Sub<&BigNum> for &BigNum {
    type Output = BigNum;

    fn sub(self, other: &BigNum) -> BigNum {
        // a - b == a + (-b): opposite signs add magnitudes, same signs
        // subtract the smaller magnitude from the larger.
        if self.negative != other.negative {
            return BigNum::new(add_mag(&self.digits, &other.digits), self.negative);
        }

        if self.cmp_mag(other) == Less {
            BigNum::new(sub_mag(&other.digits, &self.digits), !other.negative)
        } else {
            BigNum::new(sub_mag(&self.digits, &other.digits), self.negative)
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigNum, sub);
forward_binop_assign!(impl SubAssign for BigNum, sub_assign, Sub, sub);
