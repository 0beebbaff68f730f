use crate::Word;

/// Computes `⌊(a + b) / 2⌋` without overflowing.
#[inline(always)]
pub(crate) fn avg_floor<T: Word>(a: T, b: T) -> T {
    (a >> 1) + (b >> 1) + (a & b & T::ONE)
}

/// Sets every bit below the most significant set bit of `x`.
#[inline(always)]
pub(crate) const fn smear_u32(mut x: u32) -> u32 {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x
}
