use std::collections::HashMap;

/// An identity in the host's user store.
///
/// The host resolves identities however it likes; this crate only needs the
/// explicit fields it reads, never dynamic attribute access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Host-assigned unique identifier
    pub id: String,
    /// Login / display name
    pub name: String,
}

/// The host identity store boundary.
///
/// The auth gate performs exactly one read-only lookup against this trait
/// when a token matches. The lookup is treated as a single synchronous call
/// that may miss; retry and timeout policy belong to the implementor.
pub trait IdentityStore {
    /// Looks up an identity by its login name.
    ///
    /// Returns `None` when no such identity exists. A miss is not an error:
    /// the gate degrades to leaving resolution untouched.
    fn lookup_by_name(&self, name: &str) -> Option<Identity>;
}

/// An in-memory identity store.
///
/// Useful for tests and for hosts that preload their user table. Lookup is
/// by exact name match.
///
/// # Examples
///
/// ```
/// use d2cms_guard::{Identity, IdentityStore, MemoryIdentityStore};
///
/// let mut store = MemoryIdentityStore::new();
/// store.insert(Identity {
///     id: "7".to_string(),
///     name: "devuser".to_string(),
/// });
///
/// assert!(store.lookup_by_name("devuser").is_some());
/// assert!(store.lookup_by_name("nobody").is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryIdentityStore {
    entries: HashMap<String, Identity>,
}

impl MemoryIdentityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identity, keyed by its name.
    ///
    /// A later insert with the same name replaces the earlier entry.
    pub fn insert(&mut self, identity: Identity) {
        self.entries.insert(identity.name.clone(), identity);
    }

    /// Returns the number of stored identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the store holds no identities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn lookup_by_name(&self, name: &str) -> Option<Identity> {
        self.entries.get(name).cloned()
    }
}
