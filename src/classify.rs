//! Statement Intent Classification
//!
//! Keyword heuristics over unparsed SQL text. Calling layers use these
//! to decide when to confirm before executing and whether to expect a
//! result grid, so the predicates favor predictability over parsing:
//! leading whitespace is ignored and matching is case-insensitive.
//! Blank text matches nothing.
//!
//! # Known Blind Spots
//! The text is never parsed. A comment before the first keyword hides
//! the real intent, and only the leading statement of a multi-statement
//! batch is seen. A statement starting with a CTE (`WITH`) does not
//! classify as SELECT. Callers treat these results as advisory.

/// Marker that forces result-grid display for a non-SELECT statement
///
/// The editor layer plants this directive (in a comment) when a
/// statement such as a procedure call produces rows. Detection is
/// case-insensitive and position-independent.
pub const SHOW_RESULTS_DIRECTIVE: &str = "--#show-results";

const CRUD_PREFIXES: &[&str] = &["INSERT", "SELECT", "UPDATE", "DELETE"];
const DESTRUCTIVE_PREFIXES: &[&str] = &["UPDATE", "DELETE"];
const STRUCTURE_PREFIXES: &[&str] = &["ALTER", "DROP"];

/// Check whether text starts with a CRUD keyword
///
/// CRUD statements are the ones the tool knows how to template and
/// execute against a table. Matching is a textual prefix test on the
/// upper-cased, left-trimmed input.
#[must_use]
pub fn is_crud(sql: &str) -> bool {
    starts_with_any(sql, CRUD_PREFIXES)
}

/// Check whether executing the text should produce a result grid
///
/// True for SELECT statements and for any text carrying the
/// [`SHOW_RESULTS_DIRECTIVE`] marker.
#[must_use]
pub fn returns_results(sql: &str) -> bool {
    let normalized = normalize(sql);
    normalized.starts_with("SELECT") || normalized.contains(&SHOW_RESULTS_DIRECTIVE.to_uppercase())
}

/// Check whether the text destroys or rewrites existing rows
///
/// True for UPDATE and DELETE. Callers gate these behind confirmation.
#[must_use]
pub fn is_destructive(sql: &str) -> bool {
    starts_with_any(sql, DESTRUCTIVE_PREFIXES)
}

/// Check whether the text alters database structure
///
/// True for ALTER and DROP. Callers gate these behind a stronger
/// confirmation than row-level changes.
#[must_use]
pub fn is_structure_altering(sql: &str) -> bool {
    starts_with_any(sql, STRUCTURE_PREFIXES)
}

fn starts_with_any(sql: &str, prefixes: &[&str]) -> bool {
    let normalized = normalize(sql);
    prefixes.iter().any(|prefix| normalized.starts_with(prefix))
}

fn normalize(sql: &str) -> String {
    sql.trim_start().to_uppercase()
}
