use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};
use crate::BigNum;

/// Left-shifts the magnitude: prepends `shift / 64` zero words, then walks
/// the digits carrying `shift % 64` bits upward. The sign is preserved.
fn shl_digits(n: &BigNum, shift: usize) -> BigNum {
    let word_shift = shift / BITS as usize;
    let bit_shift = shift % BITS as usize;
    let len = n.digits.len();

    let mut digits = vec![0; len + word_shift + 1];
    if bit_shift == 0 {
        digits[word_shift..word_shift + len].copy_from_slice(&n.digits);
    } else {
        let mut carry: BigDigit = 0;
        for (i, &d) in n.digits.iter().enumerate() {
            let t = (DoubleBigDigit::from(d) << bit_shift) | DoubleBigDigit::from(carry);
            digits[i + word_shift] = t as BigDigit;
            carry = (t >> BITS) as BigDigit;
        }
        digits[len + word_shift] = carry;
    }

    BigNum::new(digits, n.negative)
}

/// Right-shifts the magnitude: drops `shift / 64` low words, then walks the
/// remaining digits from the top carrying `shift % 64` bits downward.
/// Returns zero once the word shift covers the whole digit vector; the sign
/// is otherwise preserved.
fn shr_digits(n: &BigNum, shift: usize) -> BigNum {
    let word_shift = shift / BITS as usize;
    let bit_shift = shift % BITS as usize;
    let len = n.digits.len();

    if word_shift >= len {
        return BigNum::zero();
    }

    let mut digits = vec![0; len - word_shift];
    if bit_shift == 0 {
        digits.copy_from_slice(&n.digits[word_shift..]);
    } else {
        let mut carry: BigDigit = 0;
        for i in (word_shift..len).rev() {
            let d = n.digits[i];
            digits[i - word_shift] = (d >> bit_shift) | carry;
            carry = d << (BITS as usize - bit_shift);
        }
    }

    BigNum::new(digits, n.negative)
}

impl Shl<usize> for &BigNum {
    type Output = BigNum;

    fn shl(self, shift: usize) -> BigNum {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }
        shl_digits(self, shift)
    }
}

impl Shl<usize> for BigNum {
    type Output = BigNum;

    #[inline]
    fn shl(self, shift: usize) -> BigNum {
        &self << shift
    }
}

impl ShlAssign<usize> for BigNum {
    #[inline]
    fn shl_assign(&mut self, shift: usize) {
        *self = &*self << shift;
    }
}

impl Shr<usize> for &BigNum {
    type Output = BigNum;

    fn shr(self, shift: usize) -> BigNum {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }
        shr_digits(self, shift)
    }
}

impl Shr<usize> for BigNum {
    type Output = BigNum;

    #[inline]
    fn shr(self, shift: usize) -> BigNum {
        &self >> shift
    }
}

impl ShrAssign<usize> for BigNum {
    #[inline]
    fn shr_assign(&mut self, shift: usize) {
        *self = &*self >> shift;
    }
}
