//! Key Column Name Heuristics
//!
//! Best-effort guesses about which column names identify a single row of
//! a table, based on naming convention alone. The row-update builder uses
//! them to decide whether an edited row's filter column can be trusted or
//! the statement needs a fail-closed guard.
//!
//! These are guesses, not catalog truth. A table keyed on an
//! unconventionally named column will produce guarded statements, which
//! the caller resolves by hand.

use std::collections::HashSet;

/// Column names conventionally used as the row key of `table_name`
///
/// All entries are lower-case; compare against a lower-cased candidate.
/// The set contains `id` and `pk`, the table name with `id`/`_id`
/// appended, and for plural table names the same suffixes on the
/// singular form (`Users` yields `userid` and `user_id`).
#[must_use]
pub fn trusted_id_columns(table_name: &str) -> HashSet<String> {
    let table = table_name.to_lowercase();
    let mut names = HashSet::from(["id".to_string(), "pk".to_string()]);
    names.insert(format!("{table}id"));
    names.insert(format!("{table}_id"));
    if let Some(singular) = table.strip_suffix('s') {
        if !singular.is_empty() {
            names.insert(format!("{singular}id"));
            names.insert(format!("{singular}_id"));
        }
    }
    names
}

/// Whether `column_name` looks like a trustworthy single-row filter
/// for `table_name`
///
/// Case-insensitive on both sides.
#[must_use]
pub fn is_trusted_row_filter(table_name: &str, column_name: &str) -> bool {
    trusted_id_columns(table_name).contains(&column_name.to_lowercase())
}
