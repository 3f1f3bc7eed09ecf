//! Edge Case Testing
//!
//! This module tests edge cases and boundary conditions to ensure querykit
//! handles unusual inputs gracefully. Tests include:
//! - Hostile identifiers (spaces, brackets, keywords, Unicode)
//! - Injection-shaped cell values
//! - Empty and degenerate snapshots
//! - Guard boundary conditions
//! - Classification of pathological query text
//!
//! These tests ensure robustness and help prevent unexpected failures in
//! production scenarios.

use pretty_assertions::assert_eq;

use querykit::{
    build_delete, build_insert, build_row_delete, build_row_update, build_select, build_update,
    is_crud, is_destructive, is_structure_altering, quote_ident, returns_results, sql_literal,
    ColumnDataType, ColumnDefinition, Placeholder, QuerykitError, SelectLimit, SelectionShape,
    SqlCellValue, TableDefinition,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn table(name: &str, columns: Vec<ColumnDefinition>) -> TableDefinition {
    TableDefinition::new(name, columns).expect("test table should validate")
}

fn text_column(name: &str) -> ColumnDefinition {
    ColumnDefinition::new(name.to_string(), ColumnDataType::Text)
}

// ============================================================================
// Hostile Identifiers
// ============================================================================

#[test]
fn test_keyword_table_name_is_quoted() {
    let stmt = build_select(&table("Order", vec![text_column("From")]), SelectLimit::None, None);
    assert_eq!(stmt.sql, "SELECT\n\t[From]\nFROM\n\t[Order]");
}

#[test]
fn test_bracket_in_table_name_is_escaped() {
    let stmt = build_delete(&table("weird]name", vec![]));
    assert_eq!(stmt.sql, "DELETE FROM\n\t[weird]]name]\nWHERE\n\t?");
    assert_eq!(stmt.placeholder, Some(Placeholder::Predicate));
}

#[test]
fn test_bracket_in_column_name_is_escaped() {
    let stmt = build_insert(&table("T", vec![text_column("a]b")]));
    assert_eq!(stmt.sql, "INSERT INTO [T]\n\t([a]]b])\nVALUES\n\t('')");
}

#[test]
fn test_unicode_identifiers_pass_through() {
    let stmt = build_insert(&table("Пользователи", vec![text_column("Имя")]));
    assert_eq!(stmt.sql, "INSERT INTO [Пользователи]\n\t([Имя])\nVALUES\n\t('')");
}

#[test]
fn test_quoting_layers_do_not_stack() {
    // Names that arrive pre-quoted are used as-is at every call depth.
    assert_eq!(quote_ident(&quote_ident("Order Details")), "[Order Details]");
}

// ============================================================================
// Injection-Shaped Values
// ============================================================================

#[test]
fn test_quote_injection_in_cell_value_stays_inside_literal() {
    let cell = SqlCellValue::new(
        "Name",
        Some("'; DELETE FROM Users; --"),
        &ColumnDataType::Text,
    );
    let key = SqlCellValue::new("Id", Some("1"), &ColumnDataType::Integer);

    let stmt = build_row_update("Users", &[cell], &key);
    assert_eq!(
        stmt.sql,
        "UPDATE\n\t[Users]\nSET\n\t[Name] = '''; DELETE FROM Users; --'\nWHERE\n\t[Id] = 1"
    );
}

#[test]
fn test_numeric_injection_falls_back_to_quoted_literal() {
    // Values that fail the numeric parse never land bare in the text.
    assert_eq!(
        sql_literal(Some("1 OR 1=1"), &ColumnDataType::Integer),
        "'1 OR 1=1'"
    );
    assert_eq!(
        sql_literal(Some("0x00; DROP TABLE x"), &ColumnDataType::Binary),
        "'0x00; DROP TABLE x'"
    );
}

#[test]
fn test_in_list_values_are_placed_preformatted() {
    let cells = vec![
        SqlCellValue::new("Email", Some("a'1@y.com"), &ColumnDataType::Text),
        SqlCellValue::new("Email", Some("b@y.com"), &ColumnDataType::Text),
    ];

    let stmt = build_row_delete("Users", &cells, SelectionShape::Column);
    assert_eq!(
        stmt.sql,
        "DELETE FROM\n\t[Users]\nWHERE\n\t[Email] IN ('a''1@y.com', 'b@y.com')"
    );
}

// ============================================================================
// Degenerate Snapshots
// ============================================================================

#[test]
fn test_table_of_only_readonly_columns_yields_empty_lists() {
    let snapshot = table(
        "Audit",
        vec![
            ColumnDefinition::identity("Id".to_string(), ColumnDataType::Integer),
            ColumnDefinition::new("Version".to_string(), ColumnDataType::RowVersion),
        ],
    );

    // Degenerate but deterministic; callers do not offer INSERT here.
    let stmt = build_insert(&snapshot);
    assert_eq!(stmt.sql, "INSERT INTO [Audit]\n\t()\nVALUES\n\t()");
}

#[test]
fn test_view_snapshot_selects_star_under_every_limit() {
    let view = table("ActiveUsers", vec![]);

    let plain = build_select(&view, SelectLimit::None, None);
    assert_eq!(plain.sql, "SELECT\n\t*\nFROM\n\t[ActiveUsers]");

    let top = build_select(&view, SelectLimit::Top, None);
    assert_eq!(top.sql, "SELECT TOP 100\n\t*\nFROM\n\t[ActiveUsers]");

    let bottom = build_select(&view, SelectLimit::Bottom, None);
    assert_eq!(bottom.sql, "SELECT TOP 100\n\t*\nFROM\n\t[ActiveUsers]\nORDER BY\n\t? DESC");
    assert_eq!(bottom.placeholder, Some(Placeholder::OrderKey));
}

#[test]
fn test_update_template_without_identity_is_incomplete() {
    let stmt = build_update(&table("Logs", vec![text_column("Message")]));
    assert_eq!(stmt.sql, "UPDATE\n\t[Logs]\nSET\n\t[Message] = ''\nWHERE\n\t?");
    assert!(!stmt.is_complete());
}

#[test]
fn test_snapshot_validation_rejects_bad_shapes() {
    let err = TableDefinition::new("", vec![]).unwrap_err();
    assert!(matches!(err, QuerykitError::EmptyTableName));

    let err = TableDefinition::new(
        "Users",
        vec![text_column("Name"), text_column("name")],
    )
    .unwrap_err();
    assert!(matches!(err, QuerykitError::DuplicateColumn { .. }));
}

// ============================================================================
// Guard Boundaries
// ============================================================================

#[test]
fn test_filter_trust_is_exact_name_membership() {
    let cell = SqlCellValue::new("Name", Some("x"), &ColumnDataType::Text);

    // "Id" is trusted for any table; "Idx" is one character off and is not.
    let trusted = build_row_update("Users", &[cell.clone()], &SqlCellValue::new("ID", Some("1"), &ColumnDataType::Integer));
    assert!(!trusted.guarded);

    let guarded = build_row_update("Users", &[cell], &SqlCellValue::new("Idx", Some("1"), &ColumnDataType::Integer));
    assert!(guarded.guarded);
    assert!(guarded.sql.contains("AND 1 = 0 /* Review the WHERE clause! */"));
}

#[test]
fn test_singular_trust_does_not_leak_across_tables() {
    let cell = SqlCellValue::new("Name", Some("x"), &ColumnDataType::Text);
    let filter = SqlCellValue::new("UserId", Some("1"), &ColumnDataType::Integer);

    // UserId identifies rows of Users, not rows of Orders.
    assert!(!build_row_update("Users", &[cell.clone()], &filter).guarded);
    assert!(build_row_update("Orders", &[cell], &filter).guarded);
}

#[test]
fn test_null_valued_filter_cell_still_synthesizes() {
    let cell = SqlCellValue::new("Name", Some("x"), &ColumnDataType::Text);
    let null_key = SqlCellValue::new("Id", None, &ColumnDataType::Integer);

    // `[Id] = NULL` matches nothing in T-SQL; the statement is inert but
    // well-formed, and the trusted column keeps it unguarded.
    let stmt = build_row_update("Users", &[cell], &null_key);
    assert_eq!(stmt.sql, "UPDATE\n\t[Users]\nSET\n\t[Name] = 'x'\nWHERE\n\t[Id] = NULL");
    assert!(!stmt.guarded);
}

// ============================================================================
// Pathological Query Text
// ============================================================================

#[test]
fn test_very_long_query_classifies_by_prefix_only() {
    let long_tail = "x".repeat(64 * 1024);
    let sql = format!("SELECT {long_tail}");
    assert!(is_crud(&sql));
    assert!(returns_results(&sql));
}

#[test]
fn test_keyword_inside_text_does_not_classify() {
    assert!(!is_destructive("SELECT * FROM DeletedUsers"));
    assert!(!is_structure_altering("SELECT 'DROP TABLE x'"));
}

#[test]
fn test_batch_classifies_by_leading_statement() {
    // Only the first keyword is seen; the rest of the batch is invisible.
    assert!(!is_destructive("SELECT 1; DELETE FROM Users"));
    assert!(is_destructive("DELETE FROM Users; SELECT 1"));
}

#[test]
fn test_whitespace_variants_normalize() {
    assert!(is_crud("\n\n\t  UPDATE Users SET Name = ''"));
    assert!(is_destructive("\r\nDELETE FROM Users"));
    assert!(returns_results("\t--#show-results\nEXEC usp_Totals"));
}
