//! Bearer-token identity resolution override.
//!
//! The gate sits behind the host's normal current-user resolution: the host
//! runs its own resolvers first, then offers the gate a chance to override
//! the outcome. Every failure path degrades to leaving resolution untouched,
//! so the host's fallback always remains in effect.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::{Credential, HeaderMap, Identity, IdentityStore};

const AUTHORIZATION: &str = "authorization";
const BEARER_PREFIX: &str = "Bearer";

/// The outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentity {
    /// The gate did not fire; the host's own resolution stands.
    Unresolved,
    /// The request presented the trusted token and resolves to this identity.
    Resolved(Identity),
}

impl ResolvedIdentity {
    /// Returns `true` when the gate resolved an identity.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the resolved identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Resolved(identity) => Some(identity),
            Self::Unresolved => None,
        }
    }
}

/// Why the gate declined to override resolution.
///
/// None of these are errors: every denial degrades to
/// [`ResolvedIdentity::Unresolved`]. The enum exists so denials can be
/// logged with a stable reason field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No token is configured; the gate is disabled.
    ConfigurationAbsent,
    /// Header missing, wrong scheme, or token mismatch.
    AuthenticationMismatch,
    /// The configured identity name does not exist in the host store.
    IdentityNotFound,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationAbsent => write!(f, "configuration absent"),
            Self::AuthenticationMismatch => write!(f, "authentication mismatch"),
            Self::IdentityNotFound => write!(f, "identity not found"),
        }
    }
}

/// The bearer-token auth gate.
///
/// Holds the single trusted [`Credential`] for the lifetime of the process
/// and decides, per request, whether to override the host's current-user
/// resolution. Stateless apart from the read-only credential; safe to share
/// across threads.
///
/// # Ordering Contract
///
/// The gate is a *late* override: invoke it after the host's default
/// resolvers have produced their best guess, so that an absent or invalid
/// token leaves that guess untouched.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{
///     Credential, HeaderMap, Identity, MemoryIdentityStore, ResolvedIdentity, TokenAuthGate,
/// };
///
/// let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));
///
/// let mut store = MemoryIdentityStore::new();
/// store.insert(Identity {
///     id: "7".to_string(),
///     name: "devuser".to_string(),
/// });
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Authorization", "Bearer abc123");
///
/// let resolved = gate.resolve(&headers, &store);
/// assert_eq!(resolved.identity().unwrap().name, "devuser");
///
/// // Wrong token: the host's own resolution stands
/// let mut headers = HeaderMap::new();
/// headers.insert("Authorization", "Bearer wrongtoken");
/// assert_eq!(gate.resolve(&headers, &store), ResolvedIdentity::Unresolved);
/// ```
#[derive(Debug)]
pub struct TokenAuthGate {
    credential: Credential,
}

impl TokenAuthGate {
    /// Creates a gate around the process-wide credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Returns the credential this gate trusts.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Decides whether the request resolves to the configured identity.
    ///
    /// Missing configuration, a malformed header, a token mismatch, and an
    /// unknown identity all degrade to [`ResolvedIdentity::Unresolved`];
    /// this method never fails and never panics. Neither the configured
    /// token nor the provided candidate is ever logged.
    pub fn resolve(
        &self,
        headers: &HeaderMap,
        store: &impl IdentityStore,
    ) -> ResolvedIdentity {
        match self.try_resolve(headers, store) {
            Ok(identity) => {
                tracing::info!(identity = %identity.name, "dev token override applied");
                ResolvedIdentity::Resolved(identity)
            }
            Err(denial) => {
                tracing::debug!(reason = %denial, "dev token override not applied");
                ResolvedIdentity::Unresolved
            }
        }
    }

    /// Late-override hook: returns the resolved identity, or `current`
    /// unchanged when the gate does not fire.
    ///
    /// This is the shape a host request pipeline wants: pass in the result
    /// of default resolution, get back either that same value or the
    /// override.
    pub fn apply(
        &self,
        current: Option<Identity>,
        headers: &HeaderMap,
        store: &impl IdentityStore,
    ) -> Option<Identity> {
        match self.resolve(headers, store) {
            ResolvedIdentity::Resolved(identity) => Some(identity),
            ResolvedIdentity::Unresolved => current,
        }
    }

    fn try_resolve(
        &self,
        headers: &HeaderMap,
        store: &impl IdentityStore,
    ) -> Result<Identity, Denial> {
        // Disabled gate: return before any header inspection.
        let token = self
            .credential
            .token()
            .ok_or(Denial::ConfigurationAbsent)?;

        let header = headers.get(AUTHORIZATION).unwrap_or("");
        if !header.starts_with(BEARER_PREFIX) {
            return Err(Denial::AuthenticationMismatch);
        }

        // Candidate is everything past "Bearer " (7 bytes), trimmed. A
        // non-UTF-8 boundary at byte 7 yields an empty candidate, which
        // simply fails the comparison.
        let provided = header.get(7..).unwrap_or("").trim();

        if !token_matches(token.expose_secret(), provided) {
            return Err(Denial::AuthenticationMismatch);
        }

        store
            .lookup_by_name(self.credential.identity_name())
            .ok_or(Denial::IdentityNotFound)
    }
}

/// Constant-time token comparison.
///
/// `ct_eq` examines every byte regardless of where the first difference
/// occurs, so the comparison leaks nothing about the mismatch position.
fn token_matches(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}
