//! Bearer-token auth gate and allow-listed metadata query filter.
//!
//! Two stateless decision components meant to be embedded in a CMS host's
//! request pipeline:
//!
//! - [`TokenAuthGate`]: given a request's headers and the single static
//!   development [`Credential`], decides whether to override the host's
//!   current-user resolution. Comparison is constant-time and every failure
//!   path degrades to leaving resolution untouched.
//! - [`MetaQueryFilter`]: given a content-listing request's parameters,
//!   decides whether to attach one allow-listed metadata equality constraint
//!   to the host's base query. Canonicalization plus the allow-list are the
//!   injection defenses.
//!
//! Untrusted request data flows through [`Tainted<T>`] and only reaches a
//! query after a [`Sanitizer`] promotes it to [`Verified<T>`]. The dev token
//! lives in [`Secret<T>`] and can never appear in log output.
//!
//! # Examples
//!
//! ```
//! use d2cms_guard::{
//!     AllowedMetaKeys, Credential, HeaderMap, Identity, MemoryIdentityStore, MetaQueryFilter,
//!     QueryParams, QuerySpec, TokenAuthGate,
//! };
//!
//! // Configured once at process start
//! let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));
//! let filter = MetaQueryFilter::new(AllowedMetaKeys::document_defaults());
//!
//! let mut store = MemoryIdentityStore::new();
//! store.insert(Identity { id: "7".into(), name: "devuser".into() });
//!
//! // Per request: identity resolution override
//! let mut headers = HeaderMap::new();
//! headers.insert("Authorization", "Bearer abc123");
//! let resolved = gate.resolve(&headers, &store);
//! assert!(resolved.is_resolved());
//!
//! // Per listing request: metadata filter passthrough
//! let params: QueryParams = [("meta_key", "document_key"), ("meta_value", "intro")]
//!     .into_iter()
//!     .collect();
//! let query = filter.augment(QuerySpec::new("type = doc"), &params);
//! assert_eq!(query.meta().unwrap().key(), "document_key");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod credential;
mod filter;
mod identity;
mod query;
mod request;
mod sanitize;
mod secret;
mod tainted;
mod verified;

#[cfg(test)]
mod test_utils;

pub use auth::{Denial, ResolvedIdentity, TokenAuthGate};
pub use credential::{Credential, IDENTITY_ENV, TOKEN_ENV};
pub use filter::{MetaQueryFilter, META_KEY_PARAM, META_VALUE_PARAM};
pub use identity::{Identity, IdentityStore, MemoryIdentityStore};
pub use query::{AllowedMetaKeys, MetaConstraint, QuerySpec};
pub use request::{HeaderMap, QueryParams};
pub use sanitize::{
    MetaKeySanitizer, MetaValueSanitizer, SanitizeError, SanitizeErrorKind, Sanitizer,
};
pub use secret::Secret;
pub use tainted::Tainted;
pub use verified::Verified;
