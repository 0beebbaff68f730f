//! De Bruijn seeded bit construction with Newton refinement.
//!
//! A multiply-and-shift De Bruijn lookup on the smeared operand yields `s`, the shift which moves
//! a single bit to the most significant bit of the root. A few restoring bit-construction steps
//! refine that seed, one or two Newton rounds finish the job for large operands, and a final
//! comparison corrects the overshoot Newton's method leaves just below perfect squares.

use crate::{Word, primitives::smear_u32};

/// De Bruijn multiplier for 32-bit powers of two.
const DEBRUIJN_MUL: u32 = 0x076b_e629;

/// De Bruijn table mapping `2^k` to the shift of the most significant bit of a root of a
/// `k`-bit value.
const DEBRUIJN_SQRT_SHIFT: [u8; 32] = [
    15, 0, 11, 0, 14, 11, 9, 1, 14, 13, 12, 5, 9, 3, 1, 6, 15, 10, 13, 8, 12, 4, 3, 5, 10, 8, 4, 2,
    7, 2, 7, 6,
];

/// Restoring bit-construction steps to run for each shift `s`.
const REFINE_STEPS: [u8; 16] = [1, 2, 3, 4, 5, 6, 4, 5, 5, 6, 4, 4, 4, 5, 5, 5];

/// Newton rounds to run for each shift `s`.
const NEWTON_ROUNDS: [u8; 16] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2];

/// Shift which moves a bit to the most significant bit of `⌊√x⌋`.
const fn shift_for_msb_of_sqrt(x: u32) -> u32 {
    // wraps to zero for `x >= 2^31`, which the table maps to 15
    let pow2 = smear_u32(x).wrapping_add(1);
    DEBRUIJN_SQRT_SHIFT[(pow2.wrapping_mul(DEBRUIJN_MUL) >> 27) as usize] as u32
}

/// Integer square root of a `u32`, defined for every operand including zero.
pub(crate) const fn table_newton_u32(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }

    let s = shift_for_msb_of_sqrt(n);
    let mut c = 1u32 << s;
    let mut g = c;

    let steps = REFINE_STEPS[s as usize];
    let mut i = 0;
    while i < steps {
        // `g < 2^16`
        if g * g > n {
            g ^= c;
        }
        i += 1;
        if i < steps {
            c >>= 1;
            g |= c;
        }
    }

    let rounds = NEWTON_ROUNDS[s as usize];
    let mut i = 0;
    while i < rounds {
        g = (g + n / g) >> 1;
        i += 1;
    }

    // Newton may land one above the root at `m^2 - 1`, including 65536 for `2^32 - 1`
    match g.checked_mul(g) {
        Some(square) if square <= n => g,
        _ => g - 1,
    }
}

/// Computes `⌊√val⌋` for operands of at most 32 bits, seeding with a De Bruijn lookup and
/// finishing with Newton's method.
///
/// Unlike the other kernels, zero is a valid operand and yields zero.
///
/// # Example
/// ```
/// assert_eq!(isqrt_kernels::isqrt_6(0u32), 0);
/// assert_eq!(isqrt_kernels::isqrt_6(u32::MAX), 65535);
/// ```
pub fn isqrt_6<T>(val: T) -> T
where
    T: Word + Into<u32>,
{
    T::truncate_u64(u64::from(table_newton_u32(val.into())))
}

#[cfg(test)]
mod tests {
    use super::{REFINE_STEPS, isqrt_6, shift_for_msb_of_sqrt, table_newton_u32};

    #[test]
    fn zero() {
        assert_eq!(isqrt_6(0u8), 0);
        assert_eq!(isqrt_6(0u16), 0);
        assert_eq!(isqrt_6(0u32), 0);
    }

    #[test]
    fn edge() {
        assert_eq!(isqrt_6(1u32), 1);
        assert_eq!(isqrt_6(2u32), 1);
        assert_eq!(isqrt_6(3u32), 1);
        assert_eq!(isqrt_6(4u32), 2);
        assert_eq!(isqrt_6(u8::MAX), 15);
        assert_eq!(isqrt_6(u16::MAX), 255);
        assert_eq!(isqrt_6(u32::MAX), 65535);
        assert_eq!(isqrt_6(0xfffe_0001u32), 65535);
        assert_eq!(isqrt_6(0xfffe_0000u32), 65534);
    }

    #[test]
    fn shift_places_msb_of_root() {
        for k in 0..32 {
            assert_eq!(shift_for_msb_of_sqrt(1u32 << k), k / 2, "x = 2^{k}");
        }
        assert_eq!(shift_for_msb_of_sqrt(3), 0);
        assert_eq!(shift_for_msb_of_sqrt(15), 1);
        assert_eq!(shift_for_msb_of_sqrt(255), 3);
        assert_eq!(shift_for_msb_of_sqrt(u32::MAX), 15);
    }

    #[test]
    fn refinement_never_shifts_past_bit_zero() {
        for (s, steps) in REFINE_STEPS.iter().enumerate() {
            assert!(usize::from(*steps) <= s + 1);
        }
    }

    #[test]
    fn squares_and_neighbours() {
        for k in 2..=0xffffu32 {
            let sq = k * k;
            assert_eq!(table_newton_u32(sq), k);
            assert_eq!(table_newton_u32(sq - 1), k - 1);
            assert_eq!(table_newton_u32(sq + 1), k);
        }
    }

    #[test]
    fn exhaustive_u16() {
        for n in 0..=u16::MAX {
            let r = u32::from(isqrt_6(n));
            let n = u32::from(n);
            assert!(r * r <= n && n < (r + 1) * (r + 1), "isqrt_6({n}) = {r}");
        }
    }

    #[test]
    fn const_eval() {
        const ROOT: u32 = table_newton_u32(144);
        assert_eq!(ROOT, 12);
    }
}
