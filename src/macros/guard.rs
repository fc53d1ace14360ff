//! The `guard!` macro - block syntax for the protected frame.

/// Run a block inside a protected frame.
///
/// # Patterns
///
/// ## Basic guard
/// ```
/// use guard_this::guard;
///
/// let captured = guard! {
///     try { panic!("boom") }
/// };
/// assert_eq!(captured.unwrap().message(), "boom");
/// ```
///
/// ## Guard with handler
/// ```
/// use guard_this::guard;
///
/// guard! {
///     try { panic!("boom") }
///     catch e {
///         assert_eq!(e.message(), "boom");
///     }
/// }
/// ```
///
/// ## Direct mode (returns a value, fallback on capture)
/// ```
/// use guard_this::guard;
///
/// let val = guard! {
///     try -> i32 { panic!("boom") }
///     else { -1 }
/// };
/// assert_eq!(val, -1);
/// ```
///
/// ## Direct mode with handler
/// ```
/// use guard_this::guard;
///
/// let val = guard! {
///     try -> usize { panic!("boom") }
///     catch e { e.message().len() }
/// };
/// assert_eq!(val, 4);
/// ```
#[macro_export]
macro_rules! guard {
    // try -> Type { } catch e { } (direct mode, handler sees the capture)
    (try -> $type:ty { $($body:tt)* } catch $err:ident { $($handler:tt)* }) => {
        $crate::protect::<$type, _>(|| { $($body)* }).unwrap_or_else(|$err| { $($handler)* })
    };

    // try -> Type { } else { } (direct mode, plain fallback)
    (try -> $type:ty { $($body:tt)* } else { $($fallback:tt)* }) => {
        $crate::protect::<$type, _>(|| { $($body)* }).unwrap_or_else(|_| { $($fallback)* })
    };

    // try { } catch e { } (side-effecting, handler sees the capture)
    (try { $($body:tt)* } catch $err:ident { $($handler:tt)* }) => {
        if let ::core::option::Option::Some($err) = $crate::run(|| { $($body)* }) {
            $($handler)*
        }
    };

    // try { } alone - yields Option<Captured>
    (try { $($body:tt)* }) => {
        $crate::run(|| { $($body)* })
    };
}
