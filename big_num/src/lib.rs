//! Big Num Engine \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision integers in sign-magnitude form with
//!   exact multiplication, truncating division and remainder, and bitwise operators
//!   that behave as if BigInt were represented in two's-complement notation.
//! - [`BigIntError`]: the division-by-zero error, and [`ParseBigIntError`] for
//!   decimal parsing.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::BigInt;
pub use error::{BigIntError, ParseBigIntError};

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!(a.divide(&b), Ok(BigInt::from(11)));
        assert_eq!(a.remainder(&b), Ok(BigInt::from(100000000000u64)));
        assert_eq!((&a | &b).to_string(), (10000000000000u64 | 900000000000u64).to_string());
        assert_eq!(a.divide(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn values_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInt>();

        let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let handles: Vec<_> = (1..=4i32)
            .map(|k| {
                let x = x.clone();
                std::thread::spawn(move || x.multiply(&BigInt::from(k)).divide(&BigInt::from(k)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(x.clone()));
        }
    }
}
