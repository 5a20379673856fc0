use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = small_values(1);
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = small_values(-1);
}

fn small_values(signum: i8) -> [BigInt; MAX_CONSTANT + 1] {
    std::array::from_fn(|val| {
        if val == 0 {
            BigInt::ZERO
        } else {
            BigInt::from_canonical(vec![val as u32], signum)
        }
    })
}
