//! Registry of the square root kernels.

use crate::{Word, isqrt_0, isqrt_1, isqrt_2, isqrt_3, isqrt_4, kernel::table_newton_u32};
use core::fmt;

#[cfg(feature = "std")]
use crate::isqrt_5;

/// Integer square root algorithm.
///
/// Lets callers select a kernel at runtime, and iterate over all of them to compare results or
/// timings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Algorithm {
    /// Restoring bit construction: [`isqrt_0`].
    BitConstruction,

    /// Digit-pair subtraction: [`isqrt_1`].
    DigitPair,

    /// Accumulator doubling: [`isqrt_2`].
    AccumulatorDoubling,

    /// Newton's method: [`isqrt_3`].
    Newton,

    /// Unrolled bit construction with width dispatch: [`isqrt_4`].
    Unrolled,

    /// De Bruijn seed with Newton refinement: [`isqrt_6`][crate::isqrt_6].
    TableNewton,

    /// Floating-point baseline: [`isqrt_5`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    Float,
}

impl Algorithm {
    /// Every available algorithm.
    #[cfg(feature = "std")]
    pub const ALL: &'static [Self] = &[
        Self::BitConstruction,
        Self::DigitPair,
        Self::AccumulatorDoubling,
        Self::Newton,
        Self::Unrolled,
        Self::TableNewton,
        Self::Float,
    ];

    /// Every available algorithm.
    #[cfg(not(feature = "std"))]
    pub const ALL: &'static [Self] = &[
        Self::BitConstruction,
        Self::DigitPair,
        Self::AccumulatorDoubling,
        Self::Newton,
        Self::Unrolled,
        Self::TableNewton,
    ];

    /// Name of the kernel function implementing this algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BitConstruction => "isqrt_0",
            Self::DigitPair => "isqrt_1",
            Self::AccumulatorDoubling => "isqrt_2",
            Self::Newton => "isqrt_3",
            Self::Unrolled => "isqrt_4",
            #[cfg(feature = "std")]
            Self::Float => "isqrt_5",
            Self::TableNewton => "isqrt_6",
        }
    }

    /// Does this algorithm accept a zero operand?
    pub const fn accepts_zero(self) -> bool {
        matches!(self, Self::TableNewton)
    }

    /// Widest operand, in bits, this algorithm accepts.
    pub const fn max_bits(self) -> u32 {
        match self {
            Self::TableNewton => 32,
            _ => 64,
        }
    }

    /// Is this algorithm exact over its whole domain?
    pub const fn is_exact(self) -> bool {
        #[cfg(feature = "std")]
        if matches!(self, Self::Float) {
            return false;
        }
        true
    }

    /// Computes `⌊√val⌋` with this algorithm.
    ///
    /// Returns `None` if `val` is outside the domain of the algorithm: zero for an algorithm which
    /// does not [accept zero][`Algorithm::accepts_zero`], or a value wider than
    /// [`Algorithm::max_bits`].
    pub fn isqrt<T: Word>(self, val: T) -> Option<T> {
        if val == T::ZERO && !self.accepts_zero() {
            return None;
        }

        let root = match self {
            Self::BitConstruction => isqrt_0(val),
            Self::DigitPair => isqrt_1(val),
            Self::AccumulatorDoubling => isqrt_2(val),
            Self::Newton => isqrt_3(val),
            Self::Unrolled => isqrt_4(val),
            #[cfg(feature = "std")]
            Self::Float => isqrt_5(val),
            Self::TableNewton => {
                let n = u32::try_from(val.widen_u64()).ok()?;
                T::truncate_u64(u64::from(table_newton_u32(n)))
            }
        };

        Some(root)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;

    #[test]
    fn zero_outside_domain() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.isqrt(0u32).is_some(), alg.accepts_zero(), "{alg}");
        }
        assert_eq!(Algorithm::TableNewton.isqrt(0u64), Some(0));
    }

    #[test]
    fn table_newton_rejects_wide_operands() {
        assert_eq!(Algorithm::TableNewton.isqrt(u64::from(u32::MAX)), Some(65535));
        assert_eq!(Algorithm::TableNewton.isqrt(1u64 << 32), None);
        assert_eq!(Algorithm::Unrolled.isqrt(1u64 << 32), Some(65536));
    }

    #[test]
    fn all_agree_on_small_operands() {
        for n in 1..=u16::MAX {
            let expected = Algorithm::BitConstruction.isqrt(n);
            for alg in Algorithm::ALL {
                assert_eq!(alg.isqrt(n), expected, "{alg}({n})");
            }
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn domain() {
        assert_eq!(Algorithm::TableNewton.max_bits(), 32);
        assert_eq!(Algorithm::Newton.max_bits(), 64);
        assert!(Algorithm::Unrolled.is_exact());
    }
}
