//! The `raise!` macro - fail with a categorized, inspectable payload.

/// Raise a [`Captured`](crate::Captured) for a protected frame to intercept.
///
/// # Patterns
///
/// ## Message only (generic category)
/// ```
/// use guard_this::{guard, raise, Captured};
///
/// let captured = guard! { try { raise!("went wrong") } }.unwrap();
/// assert_eq!(captured.category(), Captured::PANIC);
/// ```
///
/// ## Category and message
/// ```
/// use guard_this::{guard, raise};
///
/// let captured = guard! { try { raise!("Timeout", "no response") } }.unwrap();
/// assert!(captured.is("Timeout"));
/// ```
///
/// ## With structured data
/// ```
/// use guard_this::{guard, raise};
///
/// let captured = guard! {
///     try { raise!("Overflow", "value exceeds limit", { limit: "100" }) }
/// }
/// .unwrap();
/// assert_eq!(captured.get("limit").unwrap(), "100");
/// ```
#[macro_export]
macro_rules! raise {
    // raise!("Category", "message", { key: value, ... })
    ($category:expr, $message:expr, { $($key:ident : $value:expr),* $(,)? }) => {
        $crate::Captured::new($category, $message)
            $(.kv(stringify!($key), $value))*
            .raise()
    };

    // raise!("Category", "message")
    ($category:expr, $message:expr $(,)?) => {
        $crate::Captured::new($category, $message).raise()
    };

    // raise!("message")
    ($message:expr $(,)?) => {
        $crate::Captured::msg($message).raise()
    };
}
