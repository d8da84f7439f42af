//! Framework-agnostic request surface.
//!
//! The gate and the filter never see a framework request type. Host
//! integrations copy the pieces this crate reads, headers and listing
//! query parameters, into these small owned maps at the boundary.

use std::collections::HashMap;

/// A case-insensitive header name → value mapping.
///
/// Header names are normalized to ASCII lowercase on insert, so lookups
/// match regardless of the casing the client sent.
///
/// # Examples
///
/// ```
/// use d2cms_guard::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Authorization", "Bearer abc123");
///
/// assert_eq!(headers.get("authorization"), Some("Bearer abc123"));
/// assert_eq!(headers.get("AUTHORIZATION"), Some("Bearer abc123"));
/// assert_eq!(headers.get("x-missing"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct HeaderMap {
    entries: HashMap<String, String>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Looks up a header value, case-insensitively.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        self.entries
            .get(&name.as_ref().to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no headers are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Query parameters of a content-listing request.
///
/// Parameter names are matched exactly; only values the filter explicitly
/// reads (`meta_key`, `meta_value`) ever influence a query, and those go
/// through sanitization first.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    entries: HashMap<String, String>,
}

impl QueryParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Looks up a parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
