use std::fmt;

/// A wrapper for untrusted request data that must be sanitized before use.
///
/// Every value arriving from the request boundary (header values, query
/// parameters) is attacker-controlled. `Tainted<T>` marks such data and keeps
/// the inner value inaccessible until a [`Sanitizer`](crate::Sanitizer)
/// promotes it to [`Verified<T>`](crate::Verified).
///
/// # Security Properties
///
/// - Does NOT implement `Deref` or any implicit conversion traits
/// - Inner value is only reachable through a sanitizer
/// - Prevents raw `meta_key`/`meta_value` parameters from flowing into a query
///
/// # Examples
///
/// ```
/// use d2cms_guard::Tainted;
///
/// let param = Tainted::new("doc;DROP TABLE posts".to_string());
///
/// // Debug output shows the taint marker (useful in development)
/// assert!(format!("{:?}", param).contains("Tainted"));
///
/// // The raw value cannot be used directly:
/// // let key: String = param.into(); // Won't compile
/// ```
// Clone stays: the same tainted parameter may feed several sanitizers.
#[derive(Clone)]
pub struct Tainted<T> {
    // Must remain private; a public field bypasses taint tracking (CWE-20).
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for sanitization.
    ///
    /// `pub(crate)` on purpose: only sanitizer implementations inside this
    /// crate may unwrap a tainted value, and only on the way to `Verified<T>`.
    /// Widening this to `pub` would let callers skip validation entirely.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted").field("inner", &self.inner).finish()
    }
}
