//! Floating-point baseline.

use crate::Word;
use num_traits::Float;

/// Computes `√val` in double precision and truncates the result.
///
/// This is a performance baseline, not a reference: the result is exact while `val` fits in the
/// 53-bit mantissa of an `f64`, but operands near the top of the 64-bit range round before the
/// square root is taken and may come out one too large.
///
/// `val` must be non-zero; this is checked with a debug assertion.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn isqrt_5<T: Word>(val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_5: operand must be non-zero");
    let root = Float::sqrt(val.widen_u64() as f64);
    T::truncate_u64(root as u64)
}

#[cfg(test)]
mod tests {
    use super::isqrt_5;

    #[test]
    fn edge() {
        assert_eq!(isqrt_5(1u32), 1);
        assert_eq!(isqrt_5(2u32), 1);
        assert_eq!(isqrt_5(3u32), 1);
        assert_eq!(isqrt_5(4u32), 2);
        assert_eq!(isqrt_5(u8::MAX), 15);
        assert_eq!(isqrt_5(u16::MAX), 255);
        assert_eq!(isqrt_5(u32::MAX), 65535);
        assert_eq!(isqrt_5(1u64 << 32), 65536);
    }

    #[test]
    fn rounds_up_near_u64_max() {
        // `u64::MAX as f64` rounds to 2^64
        assert_eq!(isqrt_5(u64::MAX), 1 << 32);
    }

    #[test]
    fn exact_below_mantissa_width() {
        for k in (2u64..1 << 24).step_by(997) {
            assert_eq!(isqrt_5(k * k), k);
            assert_eq!(isqrt_5(k * k - 1), k - 1);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "operand must be non-zero")]
    fn zero_is_rejected() {
        let _ = isqrt_5(0u64);
    }
}
