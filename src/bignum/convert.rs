use core::fmt;
use core::str::FromStr;

use crate::big_digit::BigDigit;
use crate::error::{Error, Result};
use crate::BigNum;

impl BigNum {
    /// Parses a hex string: an optional `-`, an optional `0x`/`0X` prefix,
    /// then one or more hex digits in either case.
    ///
    /// The digit stream is consumed right to left in 16-character chunks,
    /// each becoming one 64-bit word. Anything else, including an empty
    /// digit stream, is [`Error::InvalidHex`].
    pub fn from_hex(s: &str) -> Result<BigNum> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);
        if rest.is_empty() {
            return Err(Error::InvalidHex);
        }

        let bytes = rest.as_bytes();
        let mut digits = Vec::with_capacity(bytes.len().div_ceil(16));
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(16);
            let mut word: BigDigit = 0;
            for &c in &bytes[start..end] {
                let nibble = (c as char).to_digit(16).ok_or(Error::InvalidHex)?;
                word = (word << 4) | BigDigit::from(nibble);
            }
            digits.push(word);
            end = start;
        }

        Ok(BigNum::new(digits, negative))
    }

    /// The canonical hex form: lowercase, no prefix, `-` for negatives,
    /// `"0"` for zero. Equivalent to `format!("{}", self)`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// The magnitude as big-endian bytes, `ceil(bits / 8)` of them.
    ///
    /// Zero encodes as the empty vector; [`BigNum::from_bytes_be`] restores
    /// canonical zero from it.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let len = self.byte_length();
        let mut bytes = vec![0u8; len];
        for (i, slot) in bytes.iter_mut().rev().enumerate() {
            *slot = (self.digits[i / 8] >> (8 * (i % 8))) as u8;
        }
        bytes
    }

    /// A non-negative value from big-endian bytes. Leading zero bytes are
    /// tolerated; the empty slice is canonical zero.
    pub fn from_bytes_be(bytes: &[u8]) -> BigNum {
        if bytes.is_empty() {
            return num_traits::Zero::zero();
        }

        let mut digits = vec![0 as BigDigit; bytes.len().div_ceil(8)];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            digits[i / 8] |= BigDigit::from(byte) << (8 * (i % 8));
        }
        BigNum::from_vec(digits)
    }

    /// Converts to `i64`.
    ///
    /// Everything in `[i64::MIN, i64::MAX]` converts, including the minimum
    /// itself (a negative value of magnitude 2<sup>63</sup>); anything
    /// outside is [`Error::I64Overflow`].
    pub fn to_i64(&self) -> Result<i64> {
        if self.digits.len() > 1 {
            return Err(Error::I64Overflow);
        }
        let mag = self.digits[0];
        if self.negative {
            if mag > 1 << 63 {
                Err(Error::I64Overflow)
            } else {
                Ok(mag.wrapping_neg() as i64)
            }
        } else if mag > i64::MAX as u64 {
            Err(Error::I64Overflow)
        } else {
            Ok(mag as i64)
        }
    }
}

impl fmt::Display for BigNum {
    /// Canonical hex: lowercase, no prefix, top word unpadded, lower words
    /// zero-padded to 16 digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut words = self.digits.iter().rev();
        write!(f, "{:x}", words.next().unwrap())?;
        for word in words {
            write!(f, "{:016x}", word)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for BigNum {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<BigNum> {
        BigNum::from_hex(s)
    }
}

impl From<u64> for BigNum {
    #[inline]
    fn from(n: u64) -> BigNum {
        BigNum {
            digits: vec![n],
            negative: false,
        }
    }
}

impl From<u32> for BigNum {
    #[inline]
    fn from(n: u32) -> BigNum {
        BigNum::from(u64::from(n))
    }
}

impl From<i64> for BigNum {
    #[inline]
    fn from(n: i64) -> BigNum {
        BigNum::new(vec![n.unsigned_abs()], n < 0)
    }
}

impl From<i32> for BigNum {
    #[inline]
    fn from(n: i32) -> BigNum {
        BigNum::from(i64::from(n))
    }
}

impl TryFrom<&BigNum> for i64 {
    type Error = Error;

    #[inline]
    fn try_from(n: &BigNum) -> Result<i64> {
        n.to_i64()
    }
}
