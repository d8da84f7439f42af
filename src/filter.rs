//! Allow-listed metadata equality filter for content-listing queries.

use crate::{
    AllowedMetaKeys, MetaConstraint, MetaKeySanitizer, MetaValueSanitizer, QueryParams, QuerySpec,
    Sanitizer, Tainted,
};

/// Request parameter naming the metadata key to filter on.
pub const META_KEY_PARAM: &str = "meta_key";

/// Request parameter carrying the equality value.
pub const META_VALUE_PARAM: &str = "meta_value";

/// Extends a content-listing query with a single allow-listed metadata
/// equality filter supplied via request parameters.
///
/// Pure function over its inputs and safe to call with attacker-controlled
/// parameters: the key is canonicalized before the allow-list check, and the
/// value is sanitized before it reaches the query. Unrecognized or rejected
/// parameters drop silently: the base query is returned unmodified, never
/// an error.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{AllowedMetaKeys, MetaQueryFilter, QueryParams, QuerySpec};
///
/// let filter = MetaQueryFilter::new(AllowedMetaKeys::new(["document_key"]));
///
/// let params: QueryParams = [("meta_key", "document_key"), ("meta_value", "xyz")]
///     .into_iter()
///     .collect();
///
/// let query = filter.augment(QuerySpec::new("type = doc"), &params);
/// let meta = query.meta().unwrap();
/// assert_eq!(meta.key(), "document_key");
/// assert_eq!(meta.value(), "xyz");
///
/// // A key outside the allow-list changes nothing
/// let params: QueryParams = [("meta_key", "other_field"), ("meta_value", "xyz")]
///     .into_iter()
///     .collect();
/// let query = filter.augment(QuerySpec::new("type = doc"), &params);
/// assert!(query.meta().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MetaQueryFilter {
    allowed: AllowedMetaKeys,
    key_sanitizer: MetaKeySanitizer,
    value_sanitizer: MetaValueSanitizer,
}

impl MetaQueryFilter {
    /// Creates a filter over the given allow-list.
    pub fn new(allowed: AllowedMetaKeys) -> Self {
        Self {
            allowed,
            key_sanitizer: MetaKeySanitizer,
            value_sanitizer: MetaValueSanitizer::default_limits(),
        }
    }

    /// Returns the allow-list this filter enforces.
    pub fn allowed_keys(&self) -> &AllowedMetaKeys {
        &self.allowed
    }

    /// Augments `query` with a metadata equality constraint when the request
    /// parameters name an allow-listed key.
    ///
    /// Absent/empty `meta_key`, a key that canonicalizes to nothing, a key
    /// outside the allow-list, and an unsanitizable value all return `query`
    /// unchanged.
    pub fn augment<Q>(&self, query: QuerySpec<Q>, params: &QueryParams) -> QuerySpec<Q> {
        let raw_key = match params.get(META_KEY_PARAM) {
            Some(key) if !key.is_empty() => key,
            _ => return query,
        };

        let key = match self
            .key_sanitizer
            .sanitize(Tainted::new(raw_key.to_string()))
        {
            Ok(verified) => verified.into_inner(),
            Err(error) => {
                tracing::debug!(reason = %error.kind(), "meta filter dropped: key unsanitizable");
                return query;
            }
        };

        if !self.allowed.contains(&key) {
            tracing::debug!(key = %key, "meta filter dropped: key not allow-listed");
            return query;
        }

        let raw_value = params.get(META_VALUE_PARAM).unwrap_or("");
        let value = match self
            .value_sanitizer
            .sanitize(Tainted::new(raw_value.to_string()))
        {
            Ok(verified) => verified.into_inner(),
            Err(error) => {
                tracing::debug!(reason = %error.kind(), "meta filter dropped: value unsanitizable");
                return query;
            }
        };

        tracing::debug!(key = %key, "meta filter applied");
        query.with_meta(MetaConstraint::new(key, value))
    }
}
