//! Newton's method fixed point.

use crate::{Word, primitives::avg_floor};

/// Computes `⌊√val⌋` with the integer Newton iteration `x' = ⌊(x + val / x) / 2⌋` from `x = val`.
///
/// The iteration decreases monotonically until it reaches `⌊√val⌋`, after which the next iterate
/// is no smaller. It converges in a few steps but each step costs an integer division.
///
/// `val` must be non-zero; a zero operand is caught by a debug assertion, and by the division
/// otherwise.
pub fn isqrt_3<T: Word>(val: T) -> T {
    debug_assert!(val > T::ZERO, "isqrt_3: operand must be non-zero");
    T::widen_half(newton_fixed_point(val))
}

/// Runs the Newton iteration to its fixed point, returning the root at its natural width.
fn newton_fixed_point<T: Word>(val: T) -> T::Half {
    let mut xk = val;
    loop {
        let xk1 = avg_floor(xk, val / xk);
        if xk1 >= xk {
            return xk.truncate_half();
        }
        xk = xk1;
    }
}
