//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use isqrt_kernels::{Algorithm, Word};
use num_integer::Roots;

/// `⌊√n⌋` computed by `num_integer`.
pub fn reference_isqrt(n: u64) -> u64 {
    Roots::sqrt(&n)
}

/// Does `r² ≤ n < (r + 1)²` hold? Evaluated in 128-bit arithmetic so it cannot overflow.
pub fn is_floor_sqrt(n: u64, r: u64) -> bool {
    let (n, r) = (u128::from(n), u128::from(r));
    r * r <= n && n < (r + 1) * (r + 1)
}

/// Algorithms which are exact for every operand of type `T` they accept.
pub fn exact_algorithms<T: Word>() -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL
        .iter()
        .copied()
        .filter(|alg| alg.is_exact() || T::BITS <= 32)
}

/// Runs every exact algorithm accepting `n`, asserting they all return the reference root.
pub fn assert_all_exact<T: Word>(n: T) {
    let expected = reference_isqrt(n.widen_u64());
    for alg in exact_algorithms::<T>() {
        if let Some(root) = alg.isqrt(n) {
            assert_eq!(root.widen_u64(), expected, "{alg}({n})");
        }
    }
}
