//! guard-this - Defensive execution with panic capture
//!
//! # Overview
//!
//! `guard-this` runs a caller-supplied callback inside a protected frame and
//! intercepts any panic it raises, returning the failure as an explicit,
//! inspectable [`Captured`] value instead of letting it unwind through the
//! caller. Use it at the boundary where you invoke framework or plugin
//! callbacks that might panic, without risking the host process.
//!
//! # Quick Start
//!
//! ```
//! use guard_this::run;
//!
//! # fn fire_callback() { panic!("delegate misbehaved") }
//! // A callback from code you don't control.
//! if let Some(failure) = run(|| fire_callback()) {
//!     eprintln!("callback failed: {failure}");
//! }
//! ```
//!
//! # Patterns
//!
//! ## Functions
//!
//! | Call | Description |
//! |------|-------------|
//! | `run(op)` | Execute, yield `Option<Captured>` |
//! | `protect(op)` | Execute, yield `Result<R, Captured>` |
//! | `op.guarded()` | Closure-side [`run`] |
//! | `op.protected()` | Closure-side [`protect`] |
//!
//! ## Macros
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | `guard! { try { } }` | Guard a block, yield `Option<Captured>` |
//! | `guard! { try { } catch e { } }` | Handle the capture in place |
//! | `guard! { try -> T { } else { } }` | Yield a value, fallback on capture |
//! | `guard! { try -> T { } catch e { } }` | Yield a value, handler sees capture |
//! | `raise!("msg")` | Fail with a message |
//! | `raise!("Category", "msg")` | Fail with a category |
//! | `raise!("Category", "msg", { key: val })` | Fail with structured data |
//!
//! # Guarantees
//!
//! The frame is total: for any operation it either yields the empty result
//! or exactly one capture, and it never panics itself. The first panic wins;
//! the operation is not resumed or retried. Side effects performed before
//! the panic stay applied. Captures raised with [`raise!`] or
//! [`Captured::raise`] come back with category, message, and structured data
//! unchanged.
//!
//! Out of scope: panics on other threads, `panic = "abort"` builds, stack
//! exhaustion, and process aborts all bypass the frame.

// ============================================================
// Modules
// ============================================================

mod captured;
mod ext;
mod guard;
mod macros;

// ============================================================
// Re-exports
// ============================================================

pub use captured::{Captured, IntoValue, Location, Value};
pub use ext::{GuardExt, Guarded};
pub use guard::{protect, run};

// ============================================================
// Type aliases
// ============================================================

/// Result type alias for protected calls.
///
/// `Result<T>` = `core::result::Result<T, Captured>`
pub type Result<T, E = Captured> = core::result::Result<T, E>;
