//! Accumulator doubling.

use crate::Word;

/// Computes `⌊√val⌋` by testing the cost `(2g + b) * b` of adding each bit `b` to the root `g`.
///
/// This is the digit-pair method of [`isqrt_1`][crate::isqrt_1] reformulated so that the
/// accumulator never needs halving: the cost is scaled by a shift that decreases every round.
///
/// `val` must be non-zero; this is checked with a debug assertion.
pub fn isqrt_2<T: Word>(mut val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_2: operand must be non-zero");

    let mut g = T::ZERO;
    let mut bshft = T::BITS / 2 - 1;
    let mut b = T::ONE << bshft as usize;

    while b != T::ZERO {
        let temp = ((g << 1) + b) << bshft as usize;
        if val >= temp {
            g = g + b;
            val = val - temp;
        }
        b = b >> 1;
        // wraps once `b` is exhausted, after which it is never read
        bshft = bshft.wrapping_sub(1);
    }

    g
}
