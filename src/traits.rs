//! Traits provided by this crate

mod sealed;

pub(crate) use sealed::Sealed;

use core::fmt;
use num_traits::{PrimInt, Unsigned};
use subtle::{ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Integers whose bit size is fixed at compile time.
pub trait Bounded {
    /// Size of this integer in bits.
    const BITS: u32;

    /// Size of this integer in bytes.
    const BYTES: usize;
}

/// Trait for associating constant values with a type.
pub trait Constants: Sized {
    /// The value `0`.
    const ZERO: Self;

    /// The value `1`.
    const ONE: Self;

    /// Maximum value this integer can express.
    const MAX: Self;
}

/// Fixed-width unsigned integer which the square root kernels operate on.
///
/// Implemented for [`u8`], [`u16`], [`u32`] and [`u64`]. This trait is sealed.
pub trait Word:
    'static
    + Bounded
    + ConditionallySelectable
    + ConstantTimeEq
    + Constants
    + Default
    + PrimInt
    + Sealed
    + Unsigned
    + fmt::Binary
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
{
    /// Narrowest supported integer able to hold the square root of any value of this type.
    ///
    /// This is the type of half the width, except for [`u8`] which is its own half.
    type Half: Word;

    /// Truncate to [`Word::Half`], discarding the upper bits.
    fn truncate_half(self) -> Self::Half;

    /// Widen a [`Word::Half`] back to this type.
    fn widen_half(half: Self::Half) -> Self;

    /// Widen to a `u64`.
    fn widen_u64(self) -> u64;

    /// Truncate a `u64` to this type, discarding the upper bits.
    fn truncate_u64(wide: u64) -> Self;
}

/// Random number generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a random value, uniformly distributed over the whole type.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
