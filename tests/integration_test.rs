//! End-to-end tests across the gate and the filter, exercising the crate
//! the way a host request pipeline would.

use d2cms_guard::{
    AllowedMetaKeys, Credential, HeaderMap, Identity, MemoryIdentityStore, MetaQueryFilter,
    QueryParams, QuerySpec, ResolvedIdentity, TokenAuthGate,
};

fn store_with(name: &str, id: &str) -> MemoryIdentityStore {
    let mut store = MemoryIdentityStore::new();
    store.insert(Identity {
        id: id.to_string(),
        name: name.to_string(),
    });
    store
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Authorization", format!("Bearer {token}"));
    headers
}

#[test]
fn full_auth_flow_resolves_configured_identity() {
    let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));
    let store = store_with("devuser", "42");

    let resolved = gate.resolve(&bearer("abc123"), &store);

    match resolved {
        ResolvedIdentity::Resolved(identity) => {
            assert_eq!(identity.name, "devuser");
            assert_eq!(identity.id, "42");
        }
        ResolvedIdentity::Unresolved => panic!("expected a resolved identity"),
    }
}

#[test]
fn auth_flow_degrades_at_every_failure_point() {
    let store = store_with("devuser", "42");

    // No token configured
    let disabled = TokenAuthGate::new(Credential::disabled());
    assert_eq!(
        disabled.resolve(&bearer("abc123"), &store),
        ResolvedIdentity::Unresolved
    );

    let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));

    // No Authorization header
    assert_eq!(
        gate.resolve(&HeaderMap::new(), &store),
        ResolvedIdentity::Unresolved
    );

    // Wrong scheme
    let mut basic = HeaderMap::new();
    basic.insert("Authorization", "Basic abc123");
    assert_eq!(gate.resolve(&basic, &store), ResolvedIdentity::Unresolved);

    // Wrong token
    assert_eq!(
        gate.resolve(&bearer("wrongtoken"), &store),
        ResolvedIdentity::Unresolved
    );

    // Right token, identity missing from the store
    assert_eq!(
        gate.resolve(&bearer("abc123"), &MemoryIdentityStore::new()),
        ResolvedIdentity::Unresolved
    );
}

#[test]
fn late_override_semantics_match_pipeline_contract() {
    let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));
    let store = store_with("devuser", "42");

    let host_guess = Identity {
        id: "0".to_string(),
        name: "anonymous".to_string(),
    };

    // Gate fires: host's guess is replaced
    let result = gate.apply(Some(host_guess.clone()), &bearer("abc123"), &store);
    assert_eq!(result.unwrap().name, "devuser");

    // Gate declines: host's guess survives untouched
    let result = gate.apply(Some(host_guess.clone()), &bearer("nope"), &store);
    assert_eq!(result, Some(host_guess));
}

#[test]
fn credential_from_env_reads_process_variables() {
    // Set-and-read in one test to avoid ordering issues with parallel tests
    // touching the same process environment.
    std::env::set_var(d2cms_guard::TOKEN_ENV, "  env-token  ");
    std::env::set_var(d2cms_guard::IDENTITY_ENV, "envuser");

    let credential = Credential::from_env();
    assert!(credential.is_enabled());
    assert_eq!(credential.identity_name(), "envuser");

    let gate = TokenAuthGate::new(credential);
    let store = store_with("envuser", "9");
    assert!(gate.resolve(&bearer("env-token"), &store).is_resolved());

    std::env::remove_var(d2cms_guard::TOKEN_ENV);
    std::env::remove_var(d2cms_guard::IDENTITY_ENV);
}

#[test]
fn listing_flow_forwards_only_allow_listed_filters() {
    let filter = MetaQueryFilter::new(AllowedMetaKeys::document_defaults());

    // The passthrough the sync client actually performs
    let params: QueryParams = [("meta_key", "document_key"), ("meta_value", "getting-started")]
        .into_iter()
        .collect();
    let query = filter.augment(QuerySpec::new("type = doc"), &params);
    let meta = query.meta().expect("constraint attached");
    assert_eq!(meta.key(), "document_key");
    assert_eq!(meta.value(), "getting-started");

    // Unknown dimension drops silently
    let params: QueryParams = [("meta_key", "post_password"), ("meta_value", "x")]
        .into_iter()
        .collect();
    let query = filter.augment(QuerySpec::new("type = doc"), &params);
    assert!(query.meta().is_none());
}

#[test]
fn hostile_parameters_never_reach_the_query() {
    let filter = MetaQueryFilter::new(AllowedMetaKeys::new(["document_key"]));
    let base = QuerySpec::new("type = doc");

    for hostile_key in ["doc;DROP", "document_key'--", "../document_key", "DOCUMENT_KEY; --"] {
        let params: QueryParams = [("meta_key", hostile_key), ("meta_value", "x")]
            .into_iter()
            .collect();
        let query = filter.augment(base.clone(), &params);

        if let Some(meta) = query.meta() {
            // If anything got through, it must be the canonical allow-listed
            // key, never the raw parameter.
            assert_eq!(meta.key(), "document_key");
            assert_ne!(meta.key(), hostile_key);
        }
    }

    // Values are opaque literals: markup survives, control characters do not
    let params: QueryParams = [("meta_key", "document_key"), ("meta_value", "<img\nonerror=x>")]
        .into_iter()
        .collect();
    let query = filter.augment(base, &params);
    assert_eq!(query.meta().unwrap().value(), "<imgonerror=x>");
}

#[test]
fn gate_and_filter_are_independent() {
    // The two components share no state; invoking one never affects the other.
    let gate = TokenAuthGate::new(Credential::new("abc123", "devuser"));
    let filter = MetaQueryFilter::new(AllowedMetaKeys::document_defaults());
    let store = store_with("devuser", "42");

    let params: QueryParams = [("meta_key", "document_hash"), ("meta_value", "deadbeef")]
        .into_iter()
        .collect();

    let query = filter.augment(QuerySpec::new(()), &params);
    let resolved = gate.resolve(&bearer("abc123"), &store);

    assert!(resolved.is_resolved());
    assert_eq!(query.meta().unwrap().key(), "document_hash");
}
