//! FILENAME: core/olap-layout/src/naming.rs
//! Turns qualified member names into flat identifiers usable as JSON keys.
//!
//! `[Store].[USA].[CA]` becomes `store_usa_ca`. The mapping is not
//! injective: names that differ only in bracketing or case collapse to the
//! same identifier, and later fields then overwrite earlier ones.

/// Strips `[`, `]` and `*`, lowercases ASCII letters, and turns each `.` into `_`.
/// Non-ASCII characters pass through unchanged.
pub fn friendly_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | '*'))
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c == '.' { '_' } else { c })
        .collect()
}
