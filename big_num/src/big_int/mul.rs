// Multiplication

use std::ops::{Mul, MulAssign};

use super::BigInt;
use super::digits::trim;
use crate::big_num_constants::{MULTIPLY_SQUARE_THRESHOLD, WORD_BITS};

impl BigInt {
    /// Exact product of `self` and `val`. The sign is the product of the operand signs,
    /// and multiplying by zero gives zero.
    pub fn multiply(&self, val: &BigInt) -> BigInt {
        if self.signum == 0 || val.signum == 0 {
            return BigInt::ZERO;
        }

        let result_signum = self.signum * val.signum;
        let x_len = self.mag.len();
        let y_len = val.mag.len();

        if x_len > MULTIPLY_SQUARE_THRESHOLD && self.mag == val.mag {
            return BigInt::from_canonical(square_to_len(&self.mag), result_signum);
        }

        let mag = if y_len == 1 {
            mul_by_word(&self.mag, val.mag[0])
        } else if x_len == 1 {
            mul_by_word(&val.mag, self.mag[0])
        } else {
            mul_to_len(&self.mag, &val.mag)
        };
        BigInt::from_canonical(mag, result_signum)
    }

    /// `self * self`. The result is never negative.
    pub fn square(&self) -> BigInt {
        if self.signum == 0 {
            return BigInt::ZERO;
        }
        BigInt::from_canonical(square_to_len(&self.mag), 1)
    }
}

pub(crate) fn mul_by_word(x: &[u32], y: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(x.len() + 1);
    let mut carry: u64 = 0;
    for &word in x {
        let product = word as u64 * y as u64 + carry;
        result.push(product as u32);
        carry = product >> WORD_BITS;
    }
    if carry != 0 {
        result.push(carry as u32);
    }
    trim(&mut result);
    result
}

/// Schoolbook multiplication of two magnitudes.
///
/// Each step evaluates `x[i] * y[j] + z[i + j] + carry` in 64 bits. With every term
/// at most `2^32 - 1` the sum peaks at exactly `2^64 - 1`, so nothing wraps.
pub(crate) fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
    let y_len = y.len();
    let mut z = vec![0u32; x.len() + y_len];

    for (x_index, &x_word) in x.iter().enumerate() {
        if x_word == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (y_index, &y_word) in y.iter().enumerate() {
            let product = (x_word as u64) * (y_word as u64) +
                          (z[x_index + y_index] as u64) +
                          carry;
            z[x_index + y_index] = product as u32;
            carry = product >> WORD_BITS;
        }
        z[x_index + y_len] = carry as u32;
    }

    trim(&mut z);
    z
}

/// Squares a magnitude.
///
/// In the partial products of `abcd * abcd` everything off the main diagonal
/// appears twice (`ab` and `ba`, `ac` and `ca`, ...). The off-diagonal products are
/// accumulated once, the sum is doubled with a one-bit shift, and the diagonal
/// squares `aa, bb, cc, dd` are added last.
pub(crate) fn square_to_len(x: &[u32]) -> Vec<u32> {
    let len = x.len();
    let mut z = vec![0u32; 2 * len];

    for i in 0..len {
        let mut carry: u64 = 0;
        for j in i + 1..len {
            let product = (x[i] as u64) * (x[j] as u64) + (z[i + j] as u64) + carry;
            z[i + j] = product as u32;
            carry = product >> WORD_BITS;
        }
        z[i + len] = carry as u32;
    }

    // The off-diagonal sum is below x^2 / 2, so doubling cannot carry out of z.
    let mut high_bit = 0;
    for word in z.iter_mut() {
        let next = *word >> (WORD_BITS - 1);
        *word = (*word << 1) | high_bit;
        high_bit = next;
    }

    let mut carry: u64 = 0;
    for (i, &word) in x.iter().enumerate() {
        let product = word as u64 * word as u64;
        let low = z[2 * i] as u64 + (product as u32) as u64 + carry;
        z[2 * i] = low as u32;
        let high = z[2 * i + 1] as u64 + (product >> WORD_BITS) + (low >> WORD_BITS);
        z[2 * i + 1] = high as u32;
        carry = high >> WORD_BITS;
    }

    trim(&mut z);
    z
}

forward_binop!(impl Mul, mul, multiply);
forward_assign_op!(impl MulAssign, mul_assign, multiply);
