//! Low-level algorithms for big integer arithmetic.
//!
//! This module re-exports the internal arithmetic primitives used by
//! [`BigNum`](crate::BigNum), making them available for direct use on digit
//! slices, alongside the number-theoretic routines built on top of them.

#![allow(clippy::many_single_char_names)]

// Re-export arithmetic primitives from their canonical locations.
//
// The implementations live inside the `bignum` submodules where they are
// used by the operator trait impls. We simply widen their visibility here.

// --- addition ---
pub use crate::bignum::addition::{adc, add_mag};

// --- subtraction ---
pub use crate::bignum::subtraction::{sbb, sub_mag};

// --- multiplication ---
pub use crate::bignum::multiplication::{mac_with_carry, mul_mag, mul_schoolbook};

// --- comparison ---
pub use crate::bignum::cmp_slice;

// --- number theory ---
mod gcd;
mod mod_inverse;

pub use self::gcd::xgcd;
pub use self::mod_inverse::mod_inverse;

pub(crate) use self::mod_inverse::mod_floor;
