//! Arbitrary-precision signed integer arithmetic for cryptographic
//! computations.
//!
//! The central type is [`BigNum`], a sign-and-magnitude integer over 64-bit
//! digits. On top of the usual operator set it provides the number-theoretic
//! operations cryptographic protocols are built from: modular
//! exponentiation (accelerated by Montgomery and Barrett reduction), the
//! extended Euclidean algorithm and modular inverses, Miller–Rabin
//! primality testing, and random prime generation.
//!
//! ## Example
//!
//! ```
//! use bignum::BigNum;
//!
//! let p = BigNum::from_hex("b").unwrap();
//! let inv = BigNum::from(3).mod_inverse(&p).unwrap();
//! assert_eq!(inv.to_hex(), "4");
//!
//! let m = BigNum::from(1000);
//! let r = BigNum::from(2).mod_pow(&BigNum::from(10), &m).unwrap();
//! assert_eq!(r, BigNum::from(24));
//! ```
//!
//! ## Features
//!
//! - `rand` (default): random value generation through the [`RandBigNum`]
//!   extension trait.
//! - `prime` (default, implies `rand`): the Miller–Rabin test and the
//!   [`RandPrime`] prime generator.
//! - `zeroize`: a `Zeroize` impl that clears digits and sign.
//!
//! ## Randomness
//!
//! Every randomized operation is generic over [`rand::Rng`], so the caller
//! decides the source; the zero-argument conveniences
//! ([`BigNum::is_probable_prime`]) draw from [`rand::rng`]. That generator
//! is not a vetted CSPRNG — callers generating key material should pass
//! their own cryptographically secure `Rng`.
//!
//! ## Semantics worth knowing
//!
//! - Division truncates toward zero; the remainder takes the dividend's
//!   sign.
//! - The bitwise operators combine *magnitudes* and always return a
//!   non-negative result. There is no two's-complement semantics:
//!   `-1 & 1` is `1` only in magnitude terms, never sign-extended.
//! - `Display` and `FromStr` speak canonical hex (lowercase, no prefix,
//!   `-` for negatives); there is no decimal I/O.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod algorithms;
pub mod big_digit;
mod bignum;
mod error;

pub mod bigrand;
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub mod prime;

pub use crate::bignum::{BarrettContext, BigNum, MontgomeryContext};
pub use crate::error::{Error, Result};

#[cfg(feature = "rand")]
pub use crate::bigrand::RandBigNum;

#[cfg(feature = "prime")]
pub use crate::bigrand::RandPrime;
