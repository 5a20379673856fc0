// Predicates and ordering

use std::cmp::Ordering;

use super::BigInt;
use super::digits;

impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    /// True only for `+1`: false for `-1` and for any value with more than one word.
    pub fn is_one(&self) -> bool {
        self.signum == 1 && self.mag == [1]
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }

    pub fn is_positive(&self) -> bool {
        self.signum > 0
    }

    /// Compares signs first, then magnitudes, reversed for negative values.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = digits::compare(&self.mag, &other.mag);
        if self.signum < 0 {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Compares absolute values.
    pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        digits::compare(&self.mag, &other.mag)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
