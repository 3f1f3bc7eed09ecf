//! Identifier Quoting
//!
//! Bracket quoting for T-SQL object names. Every identifier placed into
//! synthesized statement text goes through [`quote_ident`], which makes
//! hostile names (spaces, keywords, embedded brackets) safe to emit.

/// Quote an object name for T-SQL
///
/// Wraps the name in square brackets and doubles any `]` it contains:
/// `Order Details` becomes `[Order Details]`, `weird]name` becomes
/// `[weird]]name]`.
///
/// Quoting is idempotent. Input that is already a well-formed bracketed
/// identifier (every interior `]` doubled) is returned unchanged, so a
/// name can pass through quoting layers any number of times. Malformed
/// bracketed text, such as `[a]b]`, is treated as a raw name and escaped
/// in full.
#[must_use]
pub fn quote_ident(name: &str) -> String {
    if is_quoted(name) {
        return name.to_string();
    }
    format!("[{}]", name.replace(']', "]]"))
}

/// Check whether `name` is already a well-formed bracketed identifier
fn is_quoted(name: &str) -> bool {
    if name.len() < 2 || !name.starts_with('[') || !name.ends_with(']') {
        return false;
    }

    // Interior ']' characters must come in doubled pairs.
    let interior = name[1..name.len() - 1].as_bytes();
    let mut i = 0;
    while i < interior.len() {
        if interior[i] == b']' {
            if i + 1 < interior.len() && interior[i + 1] == b']' {
                i += 2;
            } else {
                return false;
            }
        } else {
            i += 1;
        }
    }
    true
}
