//! Extension traits for guarding closures.

use crate::captured::Captured;
use crate::guard::{protect, run};

/// Extension trait for running a side-effecting closure under protection.
///
/// # Examples
///
/// ```
/// use guard_this::Guarded;
///
/// let captured = (|| panic!("boom")).guarded();
/// assert_eq!(captured.unwrap().message(), "boom");
/// ```
pub trait Guarded {
    /// Equivalent to [`run`](crate::run) on this closure.
    fn guarded(self) -> Option<Captured>;
}

impl<F: FnOnce()> Guarded for F {
    #[inline]
    fn guarded(self) -> Option<Captured> {
        run(self)
    }
}

/// Extension trait for running a value-returning closure under protection.
///
/// # Examples
///
/// ```
/// use guard_this::GuardExt;
///
/// let result = (|| 21 * 2).protected();
/// assert_eq!(result.unwrap(), 42);
/// ```
pub trait GuardExt<R> {
    /// Equivalent to [`protect`](crate::protect) on this closure.
    fn protected(self) -> Result<R, Captured>;
}

impl<R, F: FnOnce() -> R> GuardExt<R> for F {
    #[inline]
    fn protected(self) -> Result<R, Captured> {
        protect(self)
    }
}
