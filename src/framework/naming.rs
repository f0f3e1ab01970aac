//! # Accessor Names
//!
//! Document keys arrive in whatever case the API uses (`extraVars`,
//! `survey_enabled`, `ID`). A [`Record`](super::Record) exposes each key under
//! an *accessor name*: the key with an underscore inserted before every
//! internal capital, lowercased.
//!
//! | key | accessor |
//! |-----|----------|
//! | `extraVars` | `extra_vars` |
//! | `zipCode` | `zip_code` |
//! | `survey_enabled` | `survey_enabled` |
//! | `URLPath` | `u_rl_path` |
//!
//! The last row is not a typo: boundaries are found pairwise and matches do
//! not overlap, so runs of capitals only split once per pair.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix added to a generated accessor name that would shadow a reserved one.
pub const COLLISION_PREFIX: char = '_';

/// Names of the methods a [`Record`](super::Record) exposes itself.
///
/// A generated accessor never takes one of these names.
pub const RESERVED: &[&str] = &[
    "accessors",
    "attr",
    "contains_key",
    "eql",
    "exclusions",
    "get",
    "get_mut",
    "inspect",
    "is_empty",
    "key_for",
    "keys",
    "kind",
    "len",
    "set",
    "set_attr",
    "to_h",
    "to_hash",
    "to_json",
    "to_map",
    "to_s",
    "to_value",
];

static CAPITAL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.)([A-Z])").unwrap());

/// Converts a document key into its accessor name.
pub fn snake_case(key: &str) -> String {
    CAPITAL_BOUNDARY
        .replace_all(key, "${1}_${2}")
        .to_lowercase()
}

/// Returns true when `name` is one of the record's own method names.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Prefixes `name` until `taken` no longer reports it as used.
pub fn disambiguate(name: String, taken: impl Fn(&str) -> bool) -> String {
    let mut name = name;
    while taken(&name) {
        name.insert(0, COLLISION_PREFIX);
    }
    name
}
