//! The protected frame: invoke a callback once and intercept any panic.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::captured::Captured;

/// Execute `operation` once inside a protected frame.
///
/// Returns `None` when the operation completes normally, or
/// `Some(`[`Captured`]`)` when it panics. The panic is fully absorbed at this
/// frame: it is never re-raised, never logged by this crate, and never
/// silently dropped.
///
/// Side effects the operation performed before panicking remain applied;
/// there is no rollback. The call is synchronous - `run` blocks until the
/// operation has either completed or panicked, and it never panics itself.
///
/// Panics raised on threads the operation spawns are not intercepted here,
/// and unwinding must be enabled (`panic = "abort"` builds terminate before
/// this frame sees anything). Stack exhaustion and process aborts are
/// likewise out of reach.
///
/// # Examples
///
/// ```
/// use guard_this::run;
///
/// assert!(run(|| ()).is_none());
///
/// let captured = run(|| panic!("boom")).unwrap();
/// assert_eq!(captured.message(), "boom");
/// ```
pub fn run<F>(operation: F) -> Option<Captured>
where
    F: FnOnce(),
{
    protect(operation).err()
}

/// Value-returning form of [`run`].
///
/// Executes `operation` once inside the protected frame and returns its
/// result, or the capture if it panicked. All of [`run`]'s guarantees apply.
///
/// # Errors
///
/// Returns `Err(Captured)` when the operation panics.
///
/// # Examples
///
/// ```
/// use guard_this::protect;
///
/// assert_eq!(protect(|| 21 * 2).unwrap(), 42);
///
/// let captured = protect(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(captured.message(), "boom");
/// ```
pub fn protect<R, F>(operation: F) -> Result<R, Captured>
where
    F: FnOnce() -> R,
{
    // AssertUnwindSafe: the operation is side-effecting by contract and its
    // effects stay applied on panic, so there is no state this frame could
    // protect by insisting on unwind safety.
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(from_payload)
}

/// Flatten a panic payload into plain data.
///
/// The payload box is dropped inside this frame; only the extracted fields
/// cross out. First match wins: a [`Captured`] raised through this crate is
/// passed through verbatim, string payloads keep their text, and anything
/// else is recorded as opaque.
fn from_payload(payload: Box<dyn Any + Send>) -> Captured {
    match payload.downcast::<Captured>() {
        Ok(captured) => *captured,
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => Captured::msg(*message),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => Captured::msg(*message),
                Err(_) => Captured::opaque(),
            },
        },
    }
}
