//! Unrolled bit construction with width dispatch.
//!
//! The fixed-width kernels handle the top bit of the root as a special case, then run one step
//! per remaining bit-pair position, and finally correct the lowest bit of the root, which the
//! unrolled steps do not decide.

use crate::Word;

/// Generates a fully unrolled `const fn` kernel for one operand width.
///
/// The shift list runs from `BITS / 2 - 1` down to `2`. The step for shift `s` decides bit `s - 1`
/// of the root by comparing against `(g << s) + (1 << (2s - 2))`, the cost of setting that bit.
macro_rules! unrolled_isqrt {
    ($name:ident, $ty:ty, [$($s:literal),+ $(,)?]) => {
        #[doc = concat!("Unrolled integer square root of a `", stringify!($ty), "`.")]
        pub(crate) const fn $name(mut val: $ty) -> $ty {
            const TOP_SQUARE: $ty = 1 << (<$ty>::BITS - 2);
            let mut g: $ty = 0;
            if val >= TOP_SQUARE {
                g = 1 << (<$ty>::BITS / 2 - 1);
                val -= TOP_SQUARE;
            }

            $(
                let temp = (g << $s) + (1 << ($s * 2 - 2));
                if val >= temp {
                    g += 1 << ($s - 1);
                    val -= temp;
                }
            )+

            if val >= g + g + 1 {
                g += 1;
            }
            g
        }
    };
}

unrolled_isqrt!(unrolled_u8, u8, [3, 2]);
unrolled_isqrt!(unrolled_u16, u16, [7, 6, 5, 4, 3, 2]);
unrolled_isqrt!(
    unrolled_u32,
    u32,
    [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2]
);
unrolled_isqrt!(
    unrolled_u64,
    u64,
    [
        31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9,
        8, 7, 6, 5, 4, 3, 2
    ]
);

/// Computes `⌊√val⌋` with the unrolled kernel of the narrowest width able to hold `val`.
///
/// An operand stored in a `u64` but below `2^16` runs the 16-bit kernel, trading a magnitude check
/// for fewer steps.
///
/// `val` must be non-zero; this is checked with a debug assertion.
pub fn isqrt_4<T: Word>(val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_4: operand must be non-zero");

    let wide = val.widen_u64();
    let root = if wide > u64::from(u32::MAX) {
        unrolled_u64(wide)
    } else if wide > u64::from(u16::MAX) {
        u64::from(unrolled_u32(wide as u32))
    } else if wide > u64::from(u8::MAX) {
        u64::from(unrolled_u16(wide as u16))
    } else {
        u64::from(unrolled_u8(wide as u8))
    };

    T::truncate_u64(root)
}
