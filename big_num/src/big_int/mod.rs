//! # BigInt
//! Immutable arbitrary-precision integers in sign-magnitude form. Bitwise operations
//! behave as if BigInt were represented in two's-complement notation.
//! # Example
//! ```
//! use bignum_engine::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.divide(&b).unwrap());
//! println!("a % b = {}", a.remainder(&b).unwrap());
//! println!("a | -b = {}", &a | &-&b);
//! ```

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::cmp::Ordering;

use crate::big_num_cache::*;
use crate::big_num_constants::*;

/// Implements a binary operator trait for every owned/borrowed operand combination by
/// forwarding to `BigInt::$func(&BigInt, &BigInt) -> BigInt`.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $func:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(self, &rhs)
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(self, rhs)
            }
        }
    };
}

macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident, $func:ident) => {
        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = BigInt::$func(self, &rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = BigInt::$func(self, rhs);
            }
        }
    };
}

mod bitwise;
mod cmp;
mod convert;
pub(crate) mod digits;
mod div;
mod mul;

/// An immutable signed integer of unbounded magnitude.
///
/// `mag` holds the magnitude as little-endian `u32` words without most-significant
/// zero words, and `signum` is `-1`, `0` or `1`. Zero is the only value with an
/// empty magnitude and a zero signum, so every integer has exactly one
/// representation and the derived equality and hash are numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

// Construction and accessors
impl BigInt {
    pub const ZERO: BigInt = BigInt { signum: 0, mag: Vec::new() };

    /// Wraps a magnitude that is already canonical.
    pub(crate) fn from_canonical(mag: Vec<u32>, signum: i8) -> Self {
        debug_assert!(digits::is_canonical(&mag));
        debug_assert_eq!(signum == 0, mag.is_empty());
        BigInt { signum, mag }
    }

    /// Trims `mag` and wraps it with `signum`, collapsing to zero when nothing is left.
    pub(crate) fn from_mag(mut mag: Vec<u32>, signum: i8) -> Self {
        digits::trim(&mut mag);
        if mag.is_empty() {
            BigInt::ZERO
        } else {
            BigInt { signum, mag }
        }
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    pub fn minus_one() -> BigInt {
        NEG_CACHE[1].clone()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        self.signum
    }

    /// The magnitude words, least significant first.
    pub fn magnitude(&self) -> &[u32] {
        &self.mag
    }

    /// Number of bits in the magnitude.
    pub fn bit_length(&self) -> u64 {
        match self.mag.last() {
            None => 0,
            Some(top) => {
                (self.mag.len() as u64 - 1) * WORD_BITS as u64 + (WORD_BITS - top.leading_zeros()) as u64
            }
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { signum: self.signum.abs(), mag: self.mag.clone() }
    }
}

// Addition and subtraction
impl BigInt {
    /// Adds the magnitude of `val` with the given effective sign.
    fn add_signed(&self, val: &BigInt, val_signum: i8) -> BigInt {
        if val_signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return BigInt { signum: val_signum, mag: val.mag.clone() };
        }

        if val_signum == self.signum {
            return BigInt::from_canonical(digits::add(&self.mag, &val.mag), self.signum);
        }

        match digits::compare(&self.mag, &val.mag) {
            Ordering::Less => BigInt::from_canonical(digits::sub(&val.mag, &self.mag), val_signum),
            Ordering::Equal => BigInt::ZERO,
            Ordering::Greater => BigInt::from_canonical(digits::sub(&self.mag, &val.mag), self.signum),
        }
    }

    pub fn add(&self, val: &BigInt) -> BigInt {
        self.add_signed(val, val.signum)
    }

    pub fn subtract(&self, val: &BigInt) -> BigInt {
        self.add_signed(val, -val.signum)
    }
}

forward_binop!(impl Add, add, add);
forward_assign_op!(impl AddAssign, add_assign, add);
forward_binop!(impl Sub, sub, subtract);
forward_assign_op!(impl SubAssign, sub_assign, subtract);

// Negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, mag } = self;
        BigInt { signum: -signum, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}
