//! Restoring bit construction.

use crate::Word;

/// Computes `⌊√val⌋` by building the root one bit at a time, most significant bit first.
///
/// Each bit of the candidate is tentatively set and cleared again if the square of the candidate
/// overshoots `val`. Takes `W / 2` iterations for a `W`-bit operand and needs no division.
///
/// `val` must be non-zero; this is checked with a debug assertion.
pub fn isqrt_0<T: Word>(val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_0: operand must be non-zero");

    let mut c = T::ONE << (T::BITS / 2 - 1) as usize;
    let mut g = c;
    loop {
        // `g < 2^(W/2)`, so the square cannot overflow
        if g * g > val {
            g = g ^ c;
        }
        c = c >> 1;
        if c == T::ZERO {
            return g;
        }
        g = g | c;
    }
}
