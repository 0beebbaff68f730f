//! Digit-pair subtraction ("paper and pencil" square root).

use crate::Word;

/// Computes `⌊√val⌋` by consuming the operand two bits at a time from the most significant pair.
///
/// Uses only shifts, additions, subtractions and comparisons, which makes it a good fit for
/// targets without a fast multiplier.
///
/// `val` must be non-zero; this is checked with a debug assertion.
pub fn isqrt_1<T: Word>(mut val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_1: operand must be non-zero");

    let mut res = T::ZERO;

    // start from the highest power of four <= `val`
    let mut bit = T::ONE << (T::BITS - 2) as usize;
    while bit > val {
        bit = bit >> 2;
    }

    while bit != T::ZERO {
        if val >= res + bit {
            val = val - (res + bit);
            res = (res >> 1) + bit;
        } else {
            res = res >> 1;
        }
        bit = bit >> 2;
    }

    res
}
