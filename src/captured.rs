//! Captured failure value and attachment types.

use core::fmt;
use std::borrow::Cow;

use smallvec::SmallVec;

// ============================================================
// Core types
// ============================================================

/// Inline storage for attachments - avoids heap allocation for the common
/// case of a handful of diagnostic entries.
const INLINE_ATTACHMENTS: usize = 4;

type AttachmentVec = SmallVec<[(Cow<'static, str>, Value); INLINE_ATTACHMENTS]>;

/// A failure intercepted by the protected frame, flattened into plain data.
///
/// A `Captured` carries:
/// - A `category` identifying the kind of failure. Plain `panic!` payloads
///   get the generic [`Captured::PANIC`] category; failures raised through
///   this crate keep whatever category they were raised with.
/// - A human-readable `message`.
/// - Optional key-value `attachments` with typed [`Value`]s.
/// - Optionally, the [`Location`] the failure was raised from.
///
/// The value owns all of its data, so it can outlive the frame that produced
/// it and cross thread or channel boundaries freely.
///
/// # Examples
///
/// ```
/// use guard_this::{run, Captured};
///
/// let captured = run(|| panic!("boom")).unwrap();
/// assert_eq!(captured.category(), Captured::PANIC);
/// assert_eq!(captured.message(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub(crate) category: Cow<'static, str>,
    pub(crate) message: String,
    pub(crate) attachments: AttachmentVec,
    pub(crate) location: Option<Location>,
}

/// Source location a failure was raised from.
///
/// Populated via `#[track_caller]` on the raising side; a capture of a plain
/// `panic!` has no location (the payload does not carry one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file path.
    pub file: &'static str,
    /// Line number.
    pub line: u32,
    /// Column number.
    pub col: u32,
}

impl Location {
    #[track_caller]
    pub(crate) fn caller() -> Self {
        let loc = core::panic::Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            col: loc.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

// ============================================================
// Captured implementation
// ============================================================

impl Captured {
    /// Generic category for failures that were not raised with one:
    /// `panic!` string payloads and opaque `panic_any` payloads.
    pub const PANIC: &'static str = "panic";

    /// Create a capture with an explicit category.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_this::Captured;
    ///
    /// let c = Captured::new("Overflow", "value exceeds limit");
    /// assert!(c.is("Overflow"));
    /// ```
    #[inline]
    pub fn new(category: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            attachments: SmallVec::new(),
            location: None,
        }
    }

    /// Create a capture from a bare message, with the generic
    /// [`Captured::PANIC`] category.
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Self::PANIC, message)
    }

    /// Capture for a payload that is neither a string nor a `Captured`.
    /// The payload itself cannot be described, only its presence.
    #[inline]
    pub(crate) fn opaque() -> Self {
        Self::msg("unknown panic payload")
    }

    /// Attach a key-value entry with a typed value.
    ///
    /// Entries keep insertion order and survive the protected frame
    /// unchanged when the capture is raised and intercepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_this::Captured;
    ///
    /// let c = Captured::new("Overflow", "value exceeds limit")
    ///     .kv("limit", "100")
    ///     .kv("actual", 250);
    /// assert_eq!(c.get("limit").unwrap(), "100");
    /// assert_eq!(c.get("actual").unwrap(), &250i64);
    /// ```
    #[inline]
    pub fn kv(mut self, key: impl Into<Cow<'static, str>>, val: impl IntoValue) -> Self {
        self.attachments.push((key.into(), val.into_value()));
        self
    }

    /// Record the caller's location on this capture.
    #[track_caller]
    pub fn here(mut self) -> Self {
        self.location = Some(Location::caller());
        self
    }

    /// Raise this capture: re-enter the panic machinery with the value as
    /// payload. A protected frame further down the stack intercepts it and
    /// yields it back verbatim.
    ///
    /// If no location was recorded yet, the caller's location is attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_this::{run, Captured};
    ///
    /// let captured = run(|| {
    ///     Captured::new("Overflow", "value exceeds limit")
    ///         .kv("limit", "100")
    ///         .raise()
    /// })
    /// .unwrap();
    /// assert_eq!(captured.category(), "Overflow");
    /// assert_eq!(captured.get("limit").unwrap(), "100");
    /// ```
    #[track_caller]
    pub fn raise(mut self) -> ! {
        if self.location.is_none() {
            self.location = Some(Location::caller());
        }
        std::panic::panic_any(self)
    }

    /// The category identifying the kind of failure.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this capture has the given category.
    #[inline]
    pub fn is(&self, category: &str) -> bool {
        self.category == category
    }

    /// Where the failure was raised, if known.
    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Iterate over key-value attachments in insertion order.
    pub fn attachments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attachments.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Look up an attachment by key. First entry wins if a key repeats.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attachments
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, "\n  at {}", loc)?;
        }
        for (k, v) in self.attachments() {
            write!(f, "\n  {}: {}", k, v)?;
        }
        Ok(())
    }
}

impl std::error::Error for Captured {}

impl From<&str> for Captured {
    fn from(s: &str) -> Self {
        Self::msg(s)
    }
}

impl From<String> for Captured {
    fn from(s: String) -> Self {
        Self::msg(s)
    }
}

// ============================================================
// Value - typed attachment values
// ============================================================

/// A typed value for structured diagnostic attachments.
///
/// Preserves type information for JSON serialization and log aggregation
/// systems.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String value
    String(String),
    /// Signed integer (i8, i16, i32, i64, isize)
    Int(i64),
    /// Unsigned integer (u8, u16, u32, u64, usize)
    Uint(u64),
    /// Floating point (f32, f64)
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Null/None value
    Null,
}

impl Value {
    /// Create a Value from any supported type.
    pub fn from<T: IntoValue>(v: T) -> Self {
        v.into_value()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

// Allow comparing Value with plain types for convenience in tests
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::String(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<u64> for Value {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Value::Uint(n) if n == other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if (n - other).abs() < f64::EPSILON)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

/// Trait for converting types into [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl<'a> IntoValue for Cow<'a, str> {
    fn into_value(self) -> Value {
        Value::String(self.into_owned())
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! impl_into_value_int {
    ($($t:ty)*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    Value::Int(self as i64)
                }
            }
        )*
    };
}

macro_rules! impl_into_value_uint {
    ($($t:ty)*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    Value::Uint(self as u64)
                }
            }
        )*
    };
}

impl_into_value_int!(i8 i16 i32 isize);
impl_into_value_uint!(u8 u16 u32 usize);

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for u64 {
    fn into_value(self) -> Value {
        Value::Uint(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

// Reference implementation - deref and convert
impl<T: IntoValue + Clone> IntoValue for &T {
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    // Serialize Value to preserve type information
    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::String(s) => serializer.serialize_str(s),
                Value::Int(n) => serializer.serialize_i64(*n),
                Value::Uint(n) => serializer.serialize_u64(*n),
                Value::Float(n) => serializer.serialize_f64(*n),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Null => serializer.serialize_none(),
            }
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            use serde::de::{self, Visitor};

            struct ValueVisitor;

            impl<'de> Visitor<'de> for ValueVisitor {
                type Value = Value;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a string, number, boolean, or null")
                }

                fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
                    Ok(Value::Bool(v))
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                    Ok(Value::Int(v))
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                    Ok(Value::Uint(v))
                }

                fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                    Ok(Value::Float(v))
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                    Ok(Value::String(v.to_string()))
                }

                fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                    Ok(Value::String(v))
                }

                fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                    Ok(Value::Null)
                }

                fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                    Ok(Value::Null)
                }
            }

            deserializer.deserialize_any(ValueVisitor)
        }
    }

    #[derive(Serialize, Deserialize)]
    struct SerializedLocation {
        file: String,
        line: u32,
        col: u32,
    }

    #[derive(Serialize, Deserialize)]
    struct SerializedCaptured {
        category: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<SerializedLocation>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        data: BTreeMap<String, Value>,
    }

    impl Serialize for Captured {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializedCaptured {
                category: self.category.to_string(),
                message: self.message.clone(),
                location: self.location.map(|loc| SerializedLocation {
                    file: loc.file.to_string(),
                    line: loc.line,
                    col: loc.col,
                }),
                data: self
                    .attachments()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Captured {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let serialized = SerializedCaptured::deserialize(deserializer)?;

            // Note: deserialized file paths are owned strings, we leak them to
            // get 'static. This is acceptable for deserialized captures which
            // are typically short-lived.
            let location = serialized.location.map(|loc| Location {
                file: Box::leak(loc.file.into_boxed_str()),
                line: loc.line,
                col: loc.col,
            });

            Ok(Self {
                category: Cow::Owned(serialized.category),
                message: serialized.message,
                attachments: serialized
                    .data
                    .into_iter()
                    .map(|(k, v)| (Cow::Owned(k), v))
                    .collect(),
                location,
            })
        }
    }
}
