//! Wrapper type for non-zero integers.

use crate::{Bounded, Constants, Word, isqrt_4};
use core::{
    fmt,
    num::{NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64},
    ops::Deref,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "rand_core")]
use {crate::Random, rand_core::RngCore};

/// Wrapper type for non-zero integers.
///
/// Holding a [`NonZero`] discharges the precondition of the kernels which reject zero, so
/// [`NonZero::isqrt`] is defined for every value it can hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Create a new non-zero integer.
    pub fn new(n: T) -> CtOption<Self>
    where
        T: Word,
    {
        let is_zero = n.ct_eq(&T::ZERO);
        CtOption::new(Self(n), !is_zero)
    }

    /// Create a new non-zero integer.
    /// Panics if the value is zero.
    pub fn new_unwrap(n: T) -> Self
    where
        T: Word,
    {
        if n == T::ZERO {
            panic!("Invalid value: zero")
        }
        Self(n)
    }

    /// Provides access to the contents of `NonZero`.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<T> NonZero<T>
where
    T: Bounded,
{
    /// Total size of the represented integer in bits.
    pub const BITS: u32 = T::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = T::BYTES;
}

impl<T> NonZero<T>
where
    T: Constants,
{
    /// The value `1`.
    pub const ONE: Self = Self(T::ONE);

    /// Maximum value this integer can express.
    pub const MAX: Self = Self(T::MAX);
}

impl<T> NonZero<T>
where
    T: Word,
{
    /// Computes `⌊√self⌋`.
    ///
    /// The root of a non-zero integer is itself non-zero.
    pub fn isqrt(self) -> Self {
        Self(isqrt_4(self.0))
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> ConditionallySelectable for NonZero<T>
where
    T: ConditionallySelectable,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(T::conditional_select(&a.0, &b.0, choice))
    }
}

impl<T> ConstantTimeEq for NonZero<T>
where
    T: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<T> Default for NonZero<T>
where
    T: Constants,
{
    fn default() -> Self {
        Self(T::ONE)
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<T> Random for NonZero<T>
where
    T: Random + Word,
{
    /// This uses rejection sampling to avoid zero.
    ///
    /// As a result, it runs in variable time.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        loop {
            if let Some(result) = Self::new(T::random(rng)).into() {
                break result;
            }
        }
    }
}

macro_rules! impl_from_core_non_zero {
    ($($core:ty => $ty:ty),+ $(,)?) => {
        $(
            impl From<$core> for NonZero<$ty> {
                fn from(integer: $core) -> Self {
                    Self(integer.get())
                }
            }

            impl From<NonZero<$ty>> for $core {
                fn from(integer: NonZero<$ty>) -> Self {
                    // a `NonZero` is only ever built from a non-zero value
                    <$core>::new(integer.0).unwrap_or(<$core>::MIN)
                }
            }
        )+
    };
}

impl_from_core_non_zero! {
    NonZeroU8 => u8,
    NonZeroU16 => u16,
    NonZeroU32 => u32,
    NonZeroU64 => u64,
}

impl<T> fmt::Display for NonZero<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> fmt::Binary for NonZero<T>
where
    T: fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl<T> fmt::LowerHex for NonZero<T>
where
    T: fmt::LowerHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T> fmt::UpperHex for NonZero<T>
where
    T: fmt::UpperHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
