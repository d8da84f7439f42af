use std::fmt;

use crate::{Tainted, Verified};

/// Error returned when sanitization rejects an input outright.
///
/// The message never contains the rejected input itself, so errors are safe
/// to log even when the input was attacker-controlled.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{SanitizeError, SanitizeErrorKind};
///
/// let error = SanitizeError::new(SanitizeErrorKind::Empty, "key is empty after canonicalization");
/// assert_eq!(error.kind(), SanitizeErrorKind::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeError {
    kind: SanitizeErrorKind,
    message: String,
}

impl SanitizeError {
    /// Creates a new sanitization error.
    pub fn new(kind: SanitizeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizeErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SanitizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for SanitizeError {}

/// Why sanitization rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeErrorKind {
    /// Nothing left after canonicalization.
    Empty,
    /// Input exceeds the maximum allowed length.
    TooLong,
}

impl fmt::Display for SanitizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::TooLong => write!(f, "input too long"),
        }
    }
}

/// Trait for promoting tainted request data to verified data.
///
/// Implementations MUST validate or normalize the input according to their
/// rules, only call `Verified::new_unchecked` once those rules hold, and
/// never leak the rejected input through the error.
pub trait Sanitizer<T> {
    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError` if the input cannot be made safe.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizeError>;
}

/// Canonicalizes metadata key names.
///
/// A metadata key is only ever compared against the allow-list, so the
/// canonical form is deliberately narrow: ASCII lowercase restricted to
/// `[a-z0-9_-]`. Any character outside that class is dropped, which means a
/// hostile key like `doc;DROP` canonicalizes to `docdrop` and can never
/// match an allow-listed key verbatim.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{MetaKeySanitizer, Sanitizer, Tainted};
///
/// let sanitizer = MetaKeySanitizer;
///
/// let key = sanitizer.sanitize(Tainted::new("Document_Key".to_string())).unwrap();
/// assert_eq!(key.as_ref(), "document_key");
///
/// let hostile = sanitizer.sanitize(Tainted::new("doc;DROP".to_string())).unwrap();
/// assert_eq!(hostile.as_ref(), "docdrop");
///
/// // Keys with no salvageable characters are rejected
/// assert!(sanitizer.sanitize(Tainted::new("!!!".to_string())).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaKeySanitizer;

impl MetaKeySanitizer {
    fn is_allowed_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
    }
}

impl Sanitizer<String> for MetaKeySanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizeError> {
        let raw = input.into_inner();

        let canonical: String = raw
            .to_ascii_lowercase()
            .chars()
            .filter(|c| Self::is_allowed_char(*c))
            .collect();

        if canonical.is_empty() {
            return Err(SanitizeError::new(
                SanitizeErrorKind::Empty,
                "key is empty after canonicalization",
            ));
        }

        Ok(Verified::new_unchecked(canonical))
    }
}

/// Sanitizes metadata filter values.
///
/// The value is an opaque equality literal: it is never interpreted as
/// markup or SQL, so the only normalization is stripping control characters
/// (including newlines and null bytes) and enforcing a length ceiling. The
/// ceiling is measured in bytes, not characters, so multibyte input hits it
/// sooner.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{MetaValueSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = MetaValueSanitizer::default_limits();
///
/// let value = sanitizer.sanitize(Tainted::new("abc\u{0}123\n".to_string())).unwrap();
/// assert_eq!(value.as_ref(), "abc123");
///
/// // Empty values are legitimate equality literals
/// let empty = sanitizer.sanitize(Tainted::new(String::new())).unwrap();
/// assert_eq!(empty.as_ref(), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetaValueSanitizer {
    max_len: usize,
}

impl MetaValueSanitizer {
    /// Creates a value sanitizer with the given maximum length in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is 0.
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be greater than 0");
        Self { max_len }
    }

    /// Creates a value sanitizer with the default maximum length of 256 bytes.
    pub fn default_limits() -> Self {
        Self::new(256)
    }
}

impl Sanitizer<String> for MetaValueSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizeError> {
        let raw = input.into_inner();

        // Strip rather than reject: control characters carry no meaning in
        // an equality literal, and the filter must degrade gracefully.
        let stripped: String = raw.chars().filter(|c| !c.is_control()).collect();

        if stripped.len() > self.max_len {
            return Err(SanitizeError::new(
                SanitizeErrorKind::TooLong,
                format!("value exceeds maximum length of {} bytes", self.max_len),
            ));
        }

        Ok(Verified::new_unchecked(stripped))
    }
}
