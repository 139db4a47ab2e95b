use core::fmt;

/// The failure modes of [`BigNum`](crate::BigNum) operations.
///
/// Every fallible operation reports one of these distinct kinds; none of
/// them corrupt any value, since all operations are pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Division or remainder by a zero divisor.
    DivisionByZero,
    /// A modulus that the requested reduction cannot accept: zero for
    /// Barrett and plain reduction, zero or even for Montgomery.
    InvalidModulus,
    /// `mod_inverse` on a value not coprime to the modulus.
    NotInvertible,
    /// A hex string with no digits or with a non-hex character.
    InvalidHex,
    /// A value outside `[i64::MIN, i64::MAX]` converted to `i64`.
    I64Overflow,
    /// `gen_prime` exhausted its attempt budget without finding a prime.
    PrimeSearchExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidModulus => "invalid modulus for the requested reduction",
            Error::NotInvertible => "value is not invertible modulo the given modulus",
            Error::InvalidHex => "invalid hex string",
            Error::I64Overflow => "value out of range for i64",
            Error::PrimeSearchExhausted => "prime search exhausted its attempt budget",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
