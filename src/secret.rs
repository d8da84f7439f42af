use std::fmt;

/// A wrapper that prevents accidental exposure of the development token.
///
/// The auth gate holds exactly one shared-secret token for the lifetime of
/// the process. `Secret<T>` guarantees that this token cannot leak through
/// `Debug`, `Display`, or any implicit conversion: the only way to read the
/// wrapped value is the deliberately verbose [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - No type information is leaked in formatted output
///
/// # Examples
///
/// ```
/// use d2cms_guard::Secret;
///
/// let token = Secret::new("abc123".to_string());
/// assert_eq!(format!("{:?}", token), "[REDACTED]");
/// assert_eq!(format!("{}", token), "[REDACTED]");
///
/// // Explicit access when the comparison actually needs the bytes
/// assert_eq!(token.expose_secret(), "abc123");
/// ```
// Do NOT add Clone, Copy, or Default derives: they would let the token be
// duplicated outside the redaction boundary.
pub struct Secret<T> {
    // Must remain private. A public field exposes the token directly and
    // defeats redaction (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// The verbose name is intentional: call sites that read secret material
    /// should be easy to audit. The returned reference must not flow into
    /// logs or error messages.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    // Must unconditionally print "[REDACTED]", including in debug builds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
