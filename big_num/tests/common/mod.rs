//! Shared test support: byte-array generators and a postfix calculator that replays
//! an operation string against this crate and against `num-bigint` side by side.

#![allow(dead_code)]

use bignum_engine::{BigInt, BigIntError};
use num_bigint::BigInt as RefInt;
use proptest::collection::{vec, SizeRange};
use proptest::prelude::*;

/// Random little-endian two's-complement byte arrays.
pub fn byte_array(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), size)
}

/// Like [`byte_array`], but never encoding zero.
pub fn non_zero_byte_array(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<u8>> {
    byte_array(size).prop_filter("value must be non-zero", |bytes| bytes.iter().any(|&b| b != 0))
}

/// Decimal rendering of a byte array followed by a separator, ready to be
/// concatenated into an operation string.
pub fn print(bytes: &[u8]) -> String {
    format!("{} ", RefInt::from_signed_bytes_le(bytes))
}

/// Replays a whitespace-separated postfix program.
///
/// Numbers are pushed on both stacks. Unary operators (`u*`, `u-`, `u+`, `u~`) act on
/// the top value; binary operators (`b*`, `bDivide`, `b%`, `b|`, `b&`, `b^`, `b+`,
/// `b-`) pop the top value as the left operand and the next one as the right operand.
pub struct StackCalc {
    tokens: Vec<String>,
    cursor: usize,
    pub mine: Vec<BigInt>,
    pub reference: Vec<RefInt>,
}

impl StackCalc {
    pub fn new(program: &str) -> Self {
        StackCalc {
            tokens: program.split_whitespace().map(str::to_owned).collect(),
            cursor: 0,
            mine: Vec::new(),
            reference: Vec::new(),
        }
    }

    /// Executes one token. Returns `Ok(false)` once the program is exhausted.
    pub fn do_next_operation(&mut self) -> Result<bool, BigIntError> {
        let Some(token) = self.tokens.get(self.cursor).cloned() else {
            return Ok(false);
        };
        self.cursor += 1;

        match token.as_str() {
            "u*" | "u-" | "u+" | "u~" => self.unary(&token),
            op if op.starts_with('b') => self.binary(op)?,
            number => {
                let mine: BigInt = number.parse().expect("operand must be decimal");
                let reference: RefInt = number.parse().expect("operand must be decimal");
                self.mine.push(mine);
                self.reference.push(reference);
            }
        }
        Ok(true)
    }

    fn unary(&mut self, op: &str) {
        let x = self.mine.pop().expect("stack underflow");
        let rx = self.reference.pop().expect("stack underflow");
        let (result, expected) = match op {
            "u*" => (x.square(), &rx * &rx),
            "u-" => (-x, -rx),
            "u+" => (x, rx),
            "u~" => (!x, !rx),
            _ => unreachable!(),
        };
        self.mine.push(result);
        self.reference.push(expected);
    }

    fn binary(&mut self, op: &str) -> Result<(), BigIntError> {
        let x = self.mine.pop().expect("stack underflow");
        let y = self.mine.pop().expect("stack underflow");
        let rx = self.reference.pop().expect("stack underflow");
        let ry = self.reference.pop().expect("stack underflow");

        let (result, expected) = match op {
            "b*" => (x.multiply(&y), &rx * &ry),
            "bDivide" => (x.divide(&y)?, &rx / &ry),
            "b%" => (x.remainder(&y)?, &rx % &ry),
            "b|" => (x.bitor(&y), &rx | &ry),
            "b&" => (x.bitand(&y), &rx & &ry),
            "b^" => (x.bitxor(&y), &rx ^ &ry),
            "b+" => (x.add(&y), &rx + &ry),
            "b-" => (x.subtract(&y), &rx - &ry),
            other => panic!("unknown operator {:?}", other),
        };
        self.mine.push(result);
        self.reference.push(expected);
        Ok(())
    }

    pub fn peek_mine(&self) -> String {
        self.mine.last().map(ToString::to_string).unwrap_or_default()
    }

    pub fn peek_reference(&self) -> String {
        self.reference.last().map(ToString::to_string).unwrap_or_default()
    }
}

/// Runs `program` and checks after every step that both calculators agree.
pub fn verify(program: &str) -> Result<(), BigIntError> {
    let mut calc = StackCalc::new(program);
    while calc.do_next_operation()? {
        assert_eq!(calc.peek_mine(), calc.peek_reference(), "program: {}", program);
    }
    Ok(())
}

/// Runs both programs on this crate only and checks they end with the same value.
pub fn verify_identity(program: &str, expected_program: &str) {
    let mut calc = StackCalc::new(program);
    while calc.do_next_operation().expect("program must not divide by zero") {}
    let mut expected = StackCalc::new(expected_program);
    while expected.do_next_operation().expect("program must not divide by zero") {}
    assert_eq!(calc.peek_mine(), expected.peek_mine(), "{} vs {}", program, expected_program);
}

/// Decodes a byte array with the reference implementation.
pub fn reference(bytes: &[u8]) -> RefInt {
    RefInt::from_signed_bytes_le(bytes)
}
