//! [`Word`] implementations for the primitive unsigned integers.

use crate::{Bounded, Constants, Sealed, Word};

#[cfg(feature = "rand_core")]
use {crate::Random, rand_core::RngCore};

macro_rules! impl_word {
    ($($ty:ty => $half:ty),+ $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl Bounded for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = (<$ty>::BITS / 8) as usize;
            }

            impl Constants for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;
            }

            impl Word for $ty {
                type Half = $half;

                #[inline(always)]
                #[allow(trivial_numeric_casts)]
                fn truncate_half(self) -> $half {
                    self as $half
                }

                #[inline(always)]
                fn widen_half(half: $half) -> Self {
                    Self::from(half)
                }

                #[inline(always)]
                fn widen_u64(self) -> u64 {
                    u64::from(self)
                }

                #[inline(always)]
                #[allow(trivial_numeric_casts)]
                fn truncate_u64(wide: u64) -> Self {
                    wide as $ty
                }
            }

            #[cfg(feature = "rand_core")]
            #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
            impl Random for $ty {
                #[allow(trivial_numeric_casts)]
                fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                    rng.next_u64() as $ty
                }
            }
        )+
    };
}

impl_word! {
    u8 => u8,
    u16 => u8,
    u32 => u16,
    u64 => u32,
}

#[cfg(test)]
mod tests {
    use crate::{Bounded, Word};

    #[test]
    fn half_holds_any_root() {
        assert_eq!(<u8 as Word>::truncate_half(15), 15u8);
        assert_eq!(<u16 as Word>::truncate_half(0x01ff), 0xffu8);
        assert_eq!(<u32 as Word>::truncate_half(0x0001_ffff), 0xffffu16);
        assert_eq!(<u64 as Word>::truncate_half(0x0000_0001_ffff_ffff), u32::MAX);
    }

    #[test]
    fn widen_is_lossless() {
        assert_eq!(<u64 as Word>::widen_half(u32::MAX), 0xffff_ffffu64);
        assert_eq!(<u16 as Word>::widen_u64(u16::MAX), 0xffff);
        assert_eq!(<u16 as Word>::truncate_u64(0x1_0001), 1u16);
    }

    #[test]
    fn sizes() {
        assert_eq!(<u8 as Bounded>::BYTES, 1);
        assert_eq!(<u64 as Bounded>::BITS, 64);
    }
}
