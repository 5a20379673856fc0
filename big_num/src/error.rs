use thiserror::Error;

/// Errors raised by [`BigInt`](crate::BigInt) arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised when parsing a decimal string into a [`BigInt`](crate::BigInt).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
