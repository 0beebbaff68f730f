//! Integer square root kernels.
//!
//! Every kernel computes `⌊√n⌋` for a fixed-width unsigned operand `n`, i.e. the unique `r` with
//! `r² ≤ n < (r + 1)²`. The kernels are interchangeable and differ only in how they get there:
//!
//! | Kernel      | Method                                          | Operands          |
//! |-------------|-------------------------------------------------|-------------------|
//! | [`isqrt_0`] | restoring bit construction                      | non-zero          |
//! | [`isqrt_1`] | digit-pair subtraction                          | non-zero          |
//! | [`isqrt_2`] | accumulator doubling                            | non-zero          |
//! | [`isqrt_3`] | Newton's method from `x₀ = n`                   | non-zero          |
//! | [`isqrt_4`] | unrolled bit construction, width dispatch       | non-zero          |
//! | `isqrt_5`   | `f64` square root (approximate near `2⁶⁴`)      | non-zero          |
//! | [`isqrt_6`] | De Bruijn seed, bit construction, Newton        | any, up to 32 bits |
//!
//! The non-zero preconditions are checked with debug assertions only.

mod bitwise;
mod digit_pair;
mod doubling;
#[cfg(feature = "std")]
mod float;
mod newton;
mod table;
mod unrolled;

pub use self::{
    bitwise::isqrt_0, digit_pair::isqrt_1, doubling::isqrt_2, newton::isqrt_3, table::isqrt_6,
    unrolled::isqrt_4,
};

#[cfg(feature = "std")]
pub use self::float::isqrt_5;

pub(crate) use self::table::table_newton_u32;
