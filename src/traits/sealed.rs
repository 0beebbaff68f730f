//! Sealed traits.

/// Prevents downstream crates from implementing [`Word`][`crate::Word`].
pub trait Sealed {}
