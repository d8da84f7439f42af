use std::env;
use std::fmt;

use crate::Secret;

/// Environment variable holding the development bearer token.
pub const TOKEN_ENV: &str = "D2CMS_WP_DEV_TOKEN";

/// Environment variable holding the identity name the token resolves to.
pub const IDENTITY_ENV: &str = "D2CMS_WP_API_USER";

/// The single static credential the auth gate trusts.
///
/// Constructed once at process start and never mutated afterward. There is
/// deliberately no multi-token support: this is a development-only bypass,
/// and a missing or empty token disables the gate entirely.
///
/// The token lives inside [`Secret`], so a `Credential` can be logged or
/// debug-printed without ever exposing the secret material.
///
/// # Examples
///
/// ```
/// use d2cms_guard::Credential;
///
/// let credential = Credential::new("abc123", "devuser");
/// assert!(credential.is_enabled());
/// assert_eq!(credential.identity_name(), "devuser");
///
/// // Empty token means the gate is off
/// let disabled = Credential::new("", "devuser");
/// assert!(!disabled.is_enabled());
/// ```
pub struct Credential {
    token: Option<Secret<String>>,
    identity: String,
}

impl Credential {
    /// Creates a credential from a token and an identity name.
    ///
    /// Both values are trimmed. An empty token (after trimming) produces a
    /// disabled credential, matching the "no dev token configured" state.
    pub fn new(token: impl Into<String>, identity: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();

        Self {
            token: if trimmed.is_empty() {
                None
            } else {
                Some(Secret::new(trimmed.to_string()))
            },
            identity: identity.into().trim().to_string(),
        }
    }

    /// Creates a credential with no token, i.e. a disabled gate.
    pub fn disabled() -> Self {
        Self {
            token: None,
            identity: String::new(),
        }
    }

    /// Loads the credential from the process environment.
    ///
    /// Reads [`TOKEN_ENV`] and [`IDENTITY_ENV`]. Absent or empty variables
    /// are not an error: a missing token simply disables the gate, which is
    /// the expected state everywhere outside development.
    pub fn from_env() -> Self {
        let token = env::var(TOKEN_ENV).unwrap_or_default();
        let identity = env::var(IDENTITY_ENV).unwrap_or_default();
        Self::new(token, identity)
    }

    /// Returns `true` when a token is configured and the gate is active.
    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the identity name this credential resolves to.
    pub fn identity_name(&self) -> &str {
        &self.identity
    }

    /// Returns the configured token, if any.
    ///
    /// `pub(crate)`: only the auth gate's comparison path may read the
    /// secret, and only through `expose_secret`.
    pub(crate) fn token(&self) -> Option<&Secret<String>> {
        self.token.as_ref()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &self.token)
            .field("identity", &self.identity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_with_token_is_enabled() {
        let credential = Credential::new("abc123", "devuser");

        assert!(credential.is_enabled());
        assert_eq!(credential.identity_name(), "devuser");
    }

    #[test]
    fn empty_token_disables_gate() {
        let credential = Credential::new("", "devuser");
        assert!(!credential.is_enabled());
    }

    #[test]
    fn whitespace_token_disables_gate() {
        let credential = Credential::new("   ", "devuser");
        assert!(!credential.is_enabled());
    }

    #[test]
    fn token_and_identity_are_trimmed() {
        let credential = Credential::new("  abc123  ", "  devuser  ");

        assert_eq!(
            credential.token().expect("enabled").expose_secret(),
            "abc123"
        );
        assert_eq!(credential.identity_name(), "devuser");
    }

    #[test]
    fn disabled_credential_has_no_token() {
        let credential = Credential::disabled();

        assert!(!credential.is_enabled());
        assert!(credential.token().is_none());
        assert_eq!(credential.identity_name(), "");
    }

    #[test]
    fn debug_output_redacts_token() {
        let credential = Credential::new("super-secret-token", "devuser");
        let debug_output = format!("{:?}", credential);

        assert!(!debug_output.contains("super-secret-token"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("devuser"));
    }
}
