/// Width of one magnitude word in bits.
pub const WORD_BITS: u32 = u32::BITS;

/// Largest power of ten that fits in a word, used to convert to and from decimal
/// nine digits at a time.
pub const DECIMAL_GROUP_RADIX: u32 = 1_000_000_000;

pub const DIGITS_PER_DECIMAL_GROUP: usize = 9;

/// Magnitudes up to this value are served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// Operands with equal magnitudes longer than this many words are multiplied with
/// the squaring routine, which does roughly half the word products.
pub const MULTIPLY_SQUARE_THRESHOLD: usize = 20;
