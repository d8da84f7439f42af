//! Shared proptest strategies for in-crate property tests.

use proptest::prelude::*;

/// Strategy: keys already in canonical form (`[a-z0-9_-]`).
pub fn arb_canonical_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_-]{1,32}").expect("valid regex")
}

/// Strategy: arbitrary printable key material, canonical or not.
pub fn arb_raw_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,64}").expect("valid regex")
}

/// Strategy: arbitrary token material without surrounding whitespace.
pub fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9]{1,40}").expect("valid regex")
}
