//! Helpers over little-endian magnitude words.
//!
//! Every function here works on plain `u32` slices with index 0 holding the least
//! significant word. Functions that build a new magnitude return it trimmed, so the
//! result can be wrapped into a [`BigInt`](super::BigInt) directly.

use std::cmp::Ordering;

use crate::big_num_constants::WORD_BITS;

/// Drops most-significant zero words. An all-zero magnitude becomes empty.
#[inline]
pub(crate) fn trim(mag: &mut Vec<u32>) {
    while let Some(&0) = mag.last() {
        mag.pop();
    }
}

/// Whether `mag` is in canonical form.
#[inline]
pub(crate) fn is_canonical(mag: &[u32]) -> bool {
    mag.last().map_or(true, |&top| top != 0)
}

/// Compares two canonical magnitudes: the shorter one is smaller, otherwise the
/// first differing word from the top decides.
pub(crate) fn compare(x: &[u32], y: &[u32]) -> Ordering {
    let x_len = x.len();
    let y_len = y.len();

    if x_len != y_len {
        return x_len.cmp(&y_len);
    }

    for pos in (0..x_len).rev() {
        let a = x[pos];
        let b = y[pos];
        if a != b {
            return a.cmp(&b);
        }
    }

    Ordering::Equal
}

pub(crate) fn add(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry: u64 = 0;
    for (index, &word) in long.iter().enumerate() {
        let other = short.get(index).copied().unwrap_or(0);
        let sum = word as u64 + other as u64 + carry;
        result.push(sum as u32);
        carry = sum >> WORD_BITS;
    }
    if carry != 0 {
        result.push(carry as u32);
    }

    result
}

/// `big - little`. The caller guarantees `big >= little`.
pub(crate) fn sub(big: &[u32], little: &[u32]) -> Vec<u32> {
    debug_assert!(compare(big, little) != Ordering::Less);

    let mut result = Vec::with_capacity(big.len());
    let mut borrow: i64 = 0;
    for (index, &word) in big.iter().enumerate() {
        let other = little.get(index).copied().unwrap_or(0);
        let difference = word as i64 - other as i64 - borrow;
        result.push(difference as u32);
        borrow = (difference < 0) as i64;
    }
    debug_assert_eq!(borrow, 0);

    trim(&mut result);
    result
}

/// Shifts `mag` left by `n < 32` bits into a vector one word longer than the input.
/// The extra top word holds the bits shifted out and may be zero.
pub(crate) fn shl_bits(mag: &[u32], n: u32) -> Vec<u32> {
    debug_assert!(n < WORD_BITS);

    let mut result = Vec::with_capacity(mag.len() + 1);
    if n == 0 {
        result.extend_from_slice(mag);
        result.push(0);
        return result;
    }

    let n_bits_2 = WORD_BITS - n;
    let mut high_bits = 0;
    for &word in mag {
        result.push((word << n) | high_bits);
        high_bits = word >> n_bits_2;
    }
    result.push(high_bits);
    result
}

/// Shifts `mag` right by `n < 32` bits in place. Bits shifted out of word 0 are lost.
pub(crate) fn shr_bits(mag: &mut [u32], n: u32) {
    debug_assert!(n < WORD_BITS);
    if n == 0 {
        return;
    }

    let n_bits_2 = WORD_BITS - n;
    let mut low_bits = 0;
    for word in mag.iter_mut().rev() {
        let val = *word;
        *word = (val >> n) | low_bits;
        low_bits = val << n_bits_2;
    }
}

/// Two's-complement negation of a fixed-width word vector: invert, then add one.
pub(crate) fn negate(words: &mut [u32]) {
    let mut carry = true;
    for word in words.iter_mut() {
        let inverted = !*word;
        if carry {
            let (sum, overflow) = inverted.overflowing_add(1);
            *word = sum;
            carry = overflow;
        } else {
            *word = inverted;
        }
    }
}
