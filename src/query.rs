use std::collections::BTreeSet;

use crate::{MetaKeySanitizer, Sanitizer, Tainted};

/// The set of metadata keys permitted as equality filters.
///
/// Anything outside this set is rejected by default. Entries are
/// canonicalized on construction with the same rules applied to incoming
/// keys (lowercase, `[a-z0-9_-]` only), so membership checks always compare
/// canonical forms. Entries with nothing salvageable after canonicalization
/// are dropped.
///
/// # Examples
///
/// ```
/// use d2cms_guard::AllowedMetaKeys;
///
/// let allowed = AllowedMetaKeys::new(["Document_Key"]);
/// assert!(allowed.contains("document_key"));
/// assert!(!allowed.contains("other_field"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllowedMetaKeys {
    keys: BTreeSet<String>,
}

impl AllowedMetaKeys {
    /// Builds an allow-list from the given keys, canonicalizing each entry.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sanitizer = MetaKeySanitizer;
        let keys = keys
            .into_iter()
            .filter_map(|key| {
                sanitizer
                    .sanitize(Tainted::new(key.into()))
                    .ok()
                    .map(|verified| verified.into_inner())
            })
            .collect();
        Self { keys }
    }

    /// The allow-list for the `doc` content type: its two registered
    /// metadata fields.
    pub fn document_defaults() -> Self {
        Self::new(["document_key", "document_hash"])
    }

    /// Returns `true` when `key` (already canonical) is permitted.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns the number of permitted keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no keys are permitted.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A single metadata equality constraint.
///
/// Both fields have passed sanitization before construction; the value is an
/// opaque literal the host compares for equality, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaConstraint {
    key: String,
    value: String,
}

impl MetaConstraint {
    /// `pub(crate)`: only the filter may attach a constraint, and only from
    /// sanitized parts.
    pub(crate) fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    /// The canonicalized metadata key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The sanitized equality value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A base query augmented by at most one metadata equality constraint.
///
/// The base query `Q` is opaque to this crate; it is whatever the host's
/// query pipeline carries. The filter either returns the spec unchanged or
/// attaches exactly one [`MetaConstraint`].
///
/// # Examples
///
/// ```
/// use d2cms_guard::QuerySpec;
///
/// // The host's base query can be any type
/// let query = QuerySpec::new("type = doc");
/// assert_eq!(*query.base(), "type = doc");
/// assert!(query.meta().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec<Q> {
    base: Q,
    meta: Option<MetaConstraint>,
}

impl<Q> QuerySpec<Q> {
    /// Wraps a base query with no metadata constraint.
    pub fn new(base: Q) -> Self {
        Self { base, meta: None }
    }

    /// The opaque base query.
    pub fn base(&self) -> &Q {
        &self.base
    }

    /// The attached metadata constraint, if any.
    pub fn meta(&self) -> Option<&MetaConstraint> {
        self.meta.as_ref()
    }

    /// Splits the spec into its base query and optional constraint, for
    /// handing off to the host's query executor.
    pub fn into_parts(self) -> (Q, Option<MetaConstraint>) {
        (self.base, self.meta)
    }

    pub(crate) fn with_meta(mut self, constraint: MetaConstraint) -> Self {
        self.meta = Some(constraint);
        self
    }
}
