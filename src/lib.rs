//! Pure Rust implementations of classical integer square root algorithms.
//!
//! # About
//! This library computes `⌊√n⌋` for fixed-width unsigned integers ([`u8`], [`u16`], [`u32`] and
//! [`u64`]) using several interchangeable kernels, so they can be compared for speed and checked
//! against each other:
//!
//! - [`isqrt_0`]: restoring bit construction.
//! - [`isqrt_1`]: digit-pair subtraction, without multiplication or division.
//! - [`isqrt_2`]: accumulator doubling.
//! - [`isqrt_3`]: Newton's method.
//! - [`isqrt_4`]: unrolled bit construction, dispatching on the magnitude of the operand.
//! - `isqrt_5`: floating-point baseline (requires the `std` feature).
//! - [`isqrt_6`]: De Bruijn seeded bit construction with Newton refinement, for 32-bit operands.
//!
//! All kernels are pure `no_std` functions which never allocate.
//!
//! # Preconditions
//! Every kernel except [`isqrt_6`] requires a non-zero operand. The precondition is checked with a
//! debug assertion; use [`NonZero`] or [`Algorithm::isqrt`] for a checked interface.
//!
//! # Usage
//! ```
//! use isqrt_kernels::{Algorithm, NonZero, isqrt_4};
//!
//! assert_eq!(isqrt_4(1u64 << 32), 65536);
//!
//! let n = NonZero::new(99u32).unwrap();
//! assert_eq!(n.isqrt().get(), 9);
//!
//! assert_eq!(Algorithm::Newton.isqrt(0u16), None);
//! assert_eq!(Algorithm::TableNewton.isqrt(0u16), Some(0));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod algorithm;
mod kernel;
mod non_zero;
mod primitives;
mod traits;
mod word;

pub use crate::{
    algorithm::Algorithm,
    kernel::{isqrt_0, isqrt_1, isqrt_2, isqrt_3, isqrt_4, isqrt_6},
    non_zero::NonZero,
    traits::*,
};
pub use subtle;

#[cfg(feature = "std")]
pub use crate::kernel::isqrt_5;

#[cfg(feature = "rand_core")]
pub use rand_core;
