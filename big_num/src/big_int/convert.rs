// Conversions: machine integers, little-endian bytes and decimal strings

use std::fmt::{self, Display};
use std::str::FromStr;

use super::BigInt;
use super::digits;
use super::div::divide_one_word;
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::ParseBigIntError;

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let signum = if val < 0 { -1 } else { 1 };
            BigInt::value_of(val.unsigned_abs() as u128, signum)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(val: u128, signum: i8) -> BigInt {
        if val == 0 {
            return BigInt::ZERO;
        }
        if val <= MAX_CONSTANT as u128 {
            return if signum > 0 {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            };
        }

        let mut mag = Vec::with_capacity(4);
        let mut rest = val;
        while rest != 0 {
            mag.push(rest as u32);
            rest >>= WORD_BITS;
        }
        BigInt::from_canonical(mag, signum)
    }

    /// Returns the value as an `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.low_u64()?;
        if self.signum < 0 {
            if magnitude <= i64::MIN.unsigned_abs() {
                Some((magnitude as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Returns the value as a `u64` if it is non-negative and fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.signum < 0 {
            return None;
        }
        self.low_u64()
    }

    fn low_u64(&self) -> Option<u64> {
        match self.mag.as_slice() {
            [] => Some(0),
            [low] => Some(*low as u64),
            [low, high] => Some(((*high as u64) << WORD_BITS) | *low as u64),
            _ => None,
        }
    }
}

// Byte import and export
impl BigInt {
    /// Reads a little-endian two's-complement byte sequence. The most significant bit
    /// of the last byte is the sign. An empty or all-zero slice is zero.
    pub fn from_bytes_le(bytes: &[u8]) -> BigInt {
        let negative = bytes.last().map_or(false, |&top| top & 0x80 != 0);
        let fill = if negative { 0xFF } else { 0x00 };

        let mut words: Vec<u32> = bytes
            .chunks(4)
            .map(|chunk| {
                let mut word = [fill; 4];
                word[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(word)
            })
            .collect();

        if negative {
            digits::negate(&mut words);
            BigInt::from_mag(words, -1)
        } else {
            BigInt::from_mag(words, 1)
        }
    }

    /// Writes the shortest little-endian two's-complement encoding of `self`, the
    /// inverse of [`BigInt::from_bytes_le`]. Zero is encoded as a single `0x00`.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let mut words = vec![0u32; self.mag.len() + 1];
        words[..self.mag.len()].copy_from_slice(&self.mag);
        if self.signum < 0 {
            digits::negate(&mut words);
        }

        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let sign_byte = if self.signum < 0 { 0xFF } else { 0x00 };
        while bytes.len() > 1 {
            let len = bytes.len();
            let redundant = bytes[len - 1] == sign_byte &&
                            (bytes[len - 2] & 0x80 == sign_byte & 0x80);
            if !redundant {
                break;
            }
            bytes.pop();
        }
        bytes
    }
}

// Decimal printing
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "", &self.magnitude_to_decimal())
    }
}

impl BigInt {
    /// Decimal digits of the magnitude, produced nine digits at a time by dividing by
    /// 10^9 and padding every group but the most significant one with leading zeros.
    fn magnitude_to_decimal(&self) -> String {
        if self.signum == 0 {
            return String::from("0");
        }

        let mut digit_groups: Vec<u32> = Vec::with_capacity(self.mag.len() * 32 / 29 + 1);
        let mut tmp = self.mag.clone();
        while !tmp.is_empty() {
            let (q, r) = divide_one_word(&tmp, DECIMAL_GROUP_RADIX);
            digit_groups.push(r);
            tmp = q;
        }

        let mut result = String::with_capacity(digit_groups.len() * DIGITS_PER_DECIMAL_GROUP);
        let mut groups = digit_groups.iter().rev();
        if let Some(top) = groups.next() {
            result.push_str(&top.to_string());
        }
        for group in groups {
            result.push_str(&format!("{:0width$}", group, width = DIGITS_PER_DECIMAL_GROUP));
        }
        result
    }
}

// Decimal parsing
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (signum, digits_str, offset) = match val.as_bytes().first() {
            Some(b'-') => (-1, &val[1..], 1),
            Some(b'+') => (1, &val[1..], 1),
            _ => (1, val, 0),
        };
        if digits_str.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((position, digit)) = digits_str.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit { digit, position: position + offset });
        }

        let digits_str = digits_str.trim_start_matches('0');
        if digits_str.is_empty() {
            return Ok(BigInt::ZERO);
        }

        // the first group takes the leftover digits so the rest are full groups
        let mut first_group_len = digits_str.len() % DIGITS_PER_DECIMAL_GROUP;
        if first_group_len == 0 {
            first_group_len = DIGITS_PER_DECIMAL_GROUP;
        }

        let mut magnitude: Vec<u32> = Vec::with_capacity(digits_str.len() / DIGITS_PER_DECIMAL_GROUP + 1);
        let mut cursor = 0;
        let mut group_len = first_group_len;
        while cursor < digits_str.len() {
            let group_val = parse_group(&digits_str[cursor..cursor + group_len]);
            destructive_mul_add(&mut magnitude, DECIMAL_GROUP_RADIX, group_val);
            cursor += group_len;
            group_len = DIGITS_PER_DECIMAL_GROUP;
        }

        Ok(BigInt::from_mag(magnitude, signum))
    }
}

/// Value of a run of at most nine ASCII digits, already validated.
fn parse_group(group: &str) -> u32 {
    group.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}

/// `magnitude = magnitude * super_radix + group_val`, in place.
#[inline(always)]
fn destructive_mul_add(magnitude: &mut Vec<u32>, super_radix: u32, group_val: u32) {
    let mut carry = group_val as u64;
    for x in magnitude.iter_mut() {
        let product = (super_radix as u64) * (*x as u64) + carry;
        *x = product as u32;
        carry = product >> WORD_BITS;
    }
    if carry != 0 {
        magnitude.push(carry as u32);
    }
}
