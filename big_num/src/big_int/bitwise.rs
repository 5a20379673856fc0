//! Bitwise operators under infinite two's-complement semantics.
//!
//! A negative value behaves as if its bits continued with an endless run of ones
//! above the stored magnitude, a non-negative one with an endless run of zeros.
//! Each operand is expanded into a two's-complement word vector one word longer than
//! the longer magnitude, so the top word of every expansion is pure sign extension.
//! The words are combined and the top bit of the result decides its sign.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::BigInt;
use super::digits;
use crate::big_num_constants::WORD_BITS;

impl BigInt {
    /// `self | val`. The result is negative whenever either operand is.
    pub fn bitor(&self, val: &BigInt) -> BigInt {
        if val.signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return val.clone();
        }
        if self.signum > 0 && val.signum > 0 {
            return BigInt::from_mag(or_mag(&self.mag, &val.mag), 1);
        }
        self.combine(val, |a, b| a | b)
    }

    /// `self & val`. The result is negative only when both operands are.
    pub fn bitand(&self, val: &BigInt) -> BigInt {
        if self.signum == 0 || val.signum == 0 {
            return BigInt::ZERO;
        }
        self.combine(val, |a, b| a & b)
    }

    /// `self ^ val`.
    pub fn bitxor(&self, val: &BigInt) -> BigInt {
        if val.signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return val.clone();
        }
        self.combine(val, |a, b| a ^ b)
    }

    /// `!self`, which is `-self - 1`.
    pub fn not(&self) -> BigInt {
        let words = to_twos_complement(self, self.mag.len() + 1);
        from_twos_complement(words.into_iter().map(|w| !w).collect())
    }

    fn combine(&self, val: &BigInt, op: impl Fn(u32, u32) -> u32) -> BigInt {
        let len = self.mag.len().max(val.mag.len()) + 1;
        let a = to_twos_complement(self, len);
        let b = to_twos_complement(val, len);
        let words = a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect();
        from_twos_complement(words)
    }
}

fn or_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = long.to_vec();
    for (word, &other) in result.iter_mut().zip(short) {
        *word |= other;
    }
    result
}

/// Expands `x` into `len` two's-complement words. `len` must exceed the magnitude
/// length so that the top word carries only sign bits.
fn to_twos_complement(x: &BigInt, len: usize) -> Vec<u32> {
    debug_assert!(len > x.mag.len());

    let mut words = vec![0u32; len];
    words[..x.mag.len()].copy_from_slice(&x.mag);
    if x.signum < 0 {
        digits::negate(&mut words);
    }
    words
}

fn from_twos_complement(mut words: Vec<u32>) -> BigInt {
    let negative = words.last().map_or(false, |&top| top >> (WORD_BITS - 1) == 1);
    if negative {
        digits::negate(&mut words);
        BigInt::from_mag(words, -1)
    } else {
        BigInt::from_mag(words, 1)
    }
}

forward_binop!(impl BitOr, bitor, bitor);
forward_assign_op!(impl BitOrAssign, bitor_assign, bitor);
forward_binop!(impl BitAnd, bitand, bitand);
forward_assign_op!(impl BitAndAssign, bitand_assign, bitand);
forward_binop!(impl BitXor, bitxor, bitxor);
forward_assign_op!(impl BitXorAssign, bitxor_assign, bitxor);

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        BigInt::not(&self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        BigInt::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(val: i64) -> BigInt {
        BigInt::from(val)
    }

    #[test]
    fn or_of_non_negatives_is_plain_or() {
        assert_eq!(big(0b1010) | big(0b0110), big(0b1110));
        assert_eq!(big(1 << 40) | big(1), big((1 << 40) + 1));
        assert_eq!(big(12345) | BigInt::ZERO, big(12345));
        assert_eq!(BigInt::ZERO | BigInt::ZERO, BigInt::ZERO);
    }

    #[test]
    fn or_with_minus_one_is_minus_one() {
        let values = [big(0), big(1), big(-1), big(i64::MAX), big(i64::MIN), "-340282366920938463463374607431768211456".parse().unwrap()];
        for x in values {
            assert_eq!(&x | &BigInt::minus_one(), BigInt::minus_one(), "x = {}", x);
            assert_eq!(&BigInt::minus_one() | &x, BigInt::minus_one(), "x = {}", x);
        }
    }

    #[test]
    fn or_with_negative_operands_matches_i64() {
        let values = [-1i64, -2, -3, -255, -256, -(1 << 31), -(1 << 32), -(1 << 32) - 1, 0x7fff_ffff, 1 << 32, 0xFFFF_FFFF, 5];
        for &a in &values {
            for &b in &values {
                assert_eq!(big(a) | big(b), big(a | b), "{} | {}", a, b);
                assert_eq!(big(a) & big(b), big(a & b), "{} & {}", a, b);
                assert_eq!(big(a) ^ big(b), big(a ^ b), "{} ^ {}", a, b);
            }
        }
    }

    #[test]
    fn negative_power_of_two_sign_extends() {
        // -2^64 is ...1111 0000_0000 0000_0000 in words
        let x: BigInt = "-18446744073709551616".parse().unwrap();
        let y: BigInt = "18446744073709551615".parse().unwrap();
        assert_eq!(&x | &y, BigInt::minus_one());
        assert_eq!(&x | &BigInt::one(), "-18446744073709551615".parse::<BigInt>().unwrap());
        assert_eq!(&x & &y, BigInt::ZERO);
    }

    #[test]
    fn or_with_differing_lengths() {
        let long: BigInt = "-79228162514264337593543950336".parse().unwrap(); // -2^96
        let short = big(-(1 << 31));
        assert_eq!(&long | &short, short);
        assert_eq!(&short | &long, short);
    }

    #[test]
    fn not_is_minus_x_minus_one() {
        for x in [0i64, 1, -1, 7, -8, i64::MAX, i64::MIN] {
            assert_eq!(!big(x), big(!x), "!{}", x);
        }
    }
}
