// Division and remainder

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use tracing::{debug, trace};

use super::BigInt;
use super::digits::{self, trim};
use crate::big_num_constants::WORD_BITS;
use crate::error::BigIntError;

impl BigInt {
    /// Quotient of `self / divisor`, truncated toward zero.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] when `divisor` is zero, whatever `self` is.
    pub fn divide(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of `self / divisor`. It takes the sign of `self`, or is zero.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] when `divisor` is zero.
    pub fn remainder(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Quotient and remainder with `self == q * divisor + r` and `|r| < |divisor|`.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.signum == 0 {
            debug!(dividend_words = self.mag.len(), "rejecting division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        if self.signum == 0 {
            return Ok((BigInt::ZERO, BigInt::ZERO));
        }

        let q_signum = self.signum * divisor.signum;
        if divisor.mag == [1] {
            return Ok((BigInt { signum: q_signum, mag: self.mag.clone() }, BigInt::ZERO));
        }

        let (q, r) = div_rem_mag(&self.mag, &divisor.mag);
        Ok((BigInt::from_mag(q, q_signum), BigInt::from_mag(r, self.signum)))
    }

    fn div_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.divide(divisor) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    fn rem_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.remainder(divisor) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Divides magnitude `u` by a non-empty magnitude `v`, returning canonical quotient
/// and remainder magnitudes.
pub(crate) fn div_rem_mag(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!v.is_empty());

    match digits::compare(u, v) {
        Ordering::Less => return (Vec::new(), u.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }

    if v.len() == 1 {
        let (q, r) = divide_one_word(u, v[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    divide_knuth(u, v)
}

/// Short division by a single word, Knuth "The Art Of Computer Programming" Vol.2
/// section 4.3.1 exercise 16.
pub(crate) fn divide_one_word(u: &[u32], v: u32) -> (Vec<u32>, u32) {
    let v = v as u64;
    let mut w = vec![0u32; u.len()];
    let mut r: u64 = 0;

    for j in (0..u.len()).rev() {
        let sum = (r << WORD_BITS) | u[j] as u64;
        w[j] = (sum / v) as u32;
        r = sum % v;
    }

    trim(&mut w);
    (w, r as u32)
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
///
/// Requires `u > v` and `v.len() >= 2`.
fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = v.len();
    let m = u.len() - n;
    let b: u64 = 1 << WORD_BITS;

    // D1 normalize
    // shift the divisor until the top bit of its leading word is set, so that
    // v[n-1] >= b / 2 and each estimate below is at most two too large
    let shift = v[n - 1].leading_zeros();
    let mut vn = digits::shl_bits(v, shift);
    vn.truncate(n);
    let mut un = digits::shl_bits(u, shift);

    let v_top = vn[n - 1] as u64;
    let v_next = vn[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    // D2 loop over quotient words from the top
    for j in (0..=m).rev() {
        // D3 estimate qhat from the two leading words of the running remainder
        let num = ((un[j + n] as u64) << WORD_BITS) | un[j + n - 1] as u64;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        loop {
            if qhat >= b || qhat * v_next > ((rhat << WORD_BITS) | un[j + n - 2] as u64) {
                qhat -= 1;
                rhat += v_top;
                if rhat < b {
                    continue;
                }
            }
            break;
        }

        // D4 multiply and subtract qhat * vn from un[j..=j+n]
        // the trial product needs a full 64-bit intermediate per word
        let mut carry: u64 = 0;
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = qhat * vn[i] as u64 + carry;
            carry = product >> WORD_BITS;
            let t = un[i + j] as i64 - (product as u32) as i64 - borrow;
            un[i + j] = t as u32;
            borrow = (t < 0) as i64;
        }
        let t = un[j + n] as i64 - carry as i64 - borrow;
        un[j + n] = t as u32;

        // D5, D6 the estimate was one too large: add the divisor back
        q[j] = qhat as u32;
        if t < 0 {
            trace!(word = j, "quotient estimate overshot, adding divisor back");
            q[j] -= 1;
            let mut carry: u64 = 0;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> WORD_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
    }

    // D8 unnormalize the remainder, the quotient is unaffected by the shift
    un.truncate(n);
    digits::shr_bits(&mut un, shift);
    trim(&mut un);
    trim(&mut q);
    (q, un)
}

forward_binop!(impl Div, div, div_or_panic);
forward_assign_op!(impl DivAssign, div_assign, div_or_panic);
forward_binop!(impl Rem, rem, rem_or_panic);
forward_assign_op!(impl RemAssign, rem_assign, rem_or_panic);
