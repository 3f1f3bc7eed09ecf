//! Statement Synthesis Engine
//!
//! Deterministic construction of T-SQL statement text from table
//! snapshots and edited grid cells. Builders are pure functions: the
//! same inputs always produce the same text, and nothing is checked
//! against a live server.
//!
//! # Fail-Closed Construction
//! Statements that would otherwise touch every row degrade to inert
//! predicates instead. A row update filtered on an unrecognized column
//! gets an `AND 1 = 0` conjunct, and an unrecognized or empty row
//! selection deletes with `WHERE 1 = 0`. The [`SqlStatement`] `guarded`
//! flag reports when this happened, so callers can force a manual
//! review before execution.
//!
//! # Unresolved Values
//! Some statements need a value only the caller knows, such as the key
//! of the row an UPDATE should target. Builders emit the `?` token in
//! that position and tag the statement with a [`Placeholder`] naming
//! the kind of hole. A statement with a placeholder must not be
//! executed as-is.

use serde::{Deserialize, Serialize};

use crate::heuristics::is_trusted_row_filter;
use crate::ident::quote_ident;
use crate::literal::SqlCellValue;
use crate::table::TableDefinition;

/// Row cap applied by limited SELECT templates
pub const SELECT_TOP_ROWS: usize = 100;

/// Token emitted where a statement needs a caller-supplied value
pub const PLACEHOLDER_TOKEN: &str = "?";

/// Predicate that matches no rows, used when a filter cannot be trusted
pub const INERT_PREDICATE: &str = "1 = 0";

/// Comment appended next to an injected inert conjunct
pub const REVIEW_GUARD_COMMENT: &str = "/* Review the WHERE clause! */";

/// Row cap policy for SELECT templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectLimit {
    /// All rows, no TOP clause
    None,
    /// First [`SELECT_TOP_ROWS`] rows in natural order
    Top,
    /// Last [`SELECT_TOP_ROWS`] rows, ordered by the identity column
    /// descending
    Bottom,
}

/// Shape of a grid selection behind a row-level DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionShape {
    /// Cells taken from one column across several rows
    Column,
    /// Cells taken from several columns of one row
    Row,
    /// Anything irregular; synthesis fails closed
    Mixed,
}

/// Kind of hole left in a synthesized statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Value of the identity key column (`[Id] = ?`)
    KeyValue,
    /// Whole row filter; no key column was known (`WHERE ?`)
    Predicate,
    /// Sort column for a bottom-N select (`ORDER BY ? DESC`)
    OrderKey,
    /// Account a permission is granted to (`TO ?`)
    Grantee,
}

impl Placeholder {
    /// Get the placeholder kind as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeyValue => "key_value",
            Self::Predicate => "predicate",
            Self::OrderKey => "order_key",
            Self::Grantee => "grantee",
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A synthesized statement plus the facts a caller needs before running it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlStatement {
    /// Statement text, pretty-printed for the editor
    pub sql: String,

    /// Hole left in the text, if any; `None` means fully resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,

    /// Whether a fail-closed predicate was injected
    #[serde(default)]
    pub guarded: bool,
}

impl SqlStatement {
    /// Wrap fully resolved statement text
    const fn complete(sql: String) -> Self {
        Self { sql, placeholder: None, guarded: false }
    }

    /// Whether the statement can run without caller edits
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.placeholder.is_none()
    }
}

impl std::fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Build an INSERT template for a table
///
/// The column list holds the writable columns in schema order; identity
/// and server-maintained columns are left out. Each value position shows
/// the column's declared default or its family's sample literal, ready
/// for hand editing.
///
/// A table with no writable columns produces empty parenthesized lists.
/// Callers should not offer INSERT for such tables.
#[must_use]
pub fn build_insert(table: &TableDefinition) -> SqlStatement {
    let columns: Vec<String> =
        table.writable_columns().map(|column| quote_ident(&column.name)).collect();
    let values: Vec<String> =
        table.writable_columns().map(|column| column.formatted_value()).collect();

    SqlStatement::complete(format!(
        "INSERT INTO {}\n\t({})\nVALUES\n\t({})",
        quote_ident(&table.name),
        columns.join(", "),
        values.join(", "),
    ))
}

/// Build a SELECT statement for browsing a table
///
/// Lists every modeled column one per line; a table with no modeled
/// columns (a view snapshot) selects `*`. A non-empty `where_clause` is
/// placed verbatim; the caller owns its correctness.
///
/// [`SelectLimit::Top`] and [`SelectLimit::Bottom`] both cap the result
/// at [`SELECT_TOP_ROWS`] rows. `Bottom` additionally orders by the
/// identity column descending; without an identity column it emits
/// `ORDER BY ? DESC` and tags the statement [`Placeholder::OrderKey`].
#[must_use]
pub fn build_select(
    table: &TableDefinition,
    limit: SelectLimit,
    where_clause: Option<&str>,
) -> SqlStatement {
    let mut sql = String::from("SELECT");
    if limit != SelectLimit::None {
        sql.push_str(&format!(" TOP {SELECT_TOP_ROWS}"));
    }

    if table.columns.is_empty() {
        sql.push_str("\n\t*");
    } else {
        for (i, column) in table.columns.iter().enumerate() {
            sql.push_str(if i == 0 { "\n\t" } else { ",\n\t" });
            sql.push_str(&column.select_expression());
        }
    }

    sql.push_str("\nFROM\n\t");
    sql.push_str(&quote_ident(&table.name));

    if let Some(clause) = where_clause.filter(|clause| !clause.trim().is_empty()) {
        sql.push_str("\nWHERE\n\t");
        sql.push_str(clause);
    }

    let mut placeholder = None;
    if limit == SelectLimit::Bottom {
        sql.push_str("\nORDER BY\n\t");
        match table.identity_column() {
            Some(id) => {
                sql.push_str(&quote_ident(&id.name));
                sql.push_str(" DESC");
            }
            None => {
                sql.push_str(PLACEHOLDER_TOKEN);
                sql.push_str(" DESC");
                placeholder = Some(Placeholder::OrderKey);
            }
        }
    }

    SqlStatement { sql, placeholder, guarded: false }
}

/// Build an UPDATE template for a table
///
/// The SET list assigns each writable column its declared default or
/// sample literal. The WHERE clause follows the identity policy: with an
/// identity column the filter is `<id> = ?` ([`Placeholder::KeyValue`]),
/// without one it is the bare `?` token ([`Placeholder::Predicate`]).
#[must_use]
pub fn build_update(table: &TableDefinition) -> SqlStatement {
    let assignments: Vec<String> = table
        .writable_columns()
        .map(|column| format!("\t{} = {}", quote_ident(&column.name), column.formatted_value()))
        .collect();
    let (filter, placeholder) = identity_filter(table);

    SqlStatement {
        sql: format!(
            "UPDATE\n\t{}\nSET\n{}\nWHERE\n\t{}",
            quote_ident(&table.name),
            assignments.join(",\n"),
            filter,
        ),
        placeholder: Some(placeholder),
        guarded: false,
    }
}

/// Build an UPDATE for edited cells of one grid row
///
/// Assignments come from `update_cells` in input order, each placing its
/// pre-formatted literal. The row is located by `filter_cell`, typically
/// the row's key cell captured before the edit.
///
/// When the filter column does not look like a key for the table (see
/// [`crate::heuristics`]), the filter alone could match many rows, so an
/// `AND 1 = 0` conjunct with a review comment is appended and `guarded`
/// is set. An empty `update_cells` slice produces a malformed SET list;
/// callers only invoke this with at least one edited cell.
#[must_use]
pub fn build_row_update(
    table_name: &str,
    update_cells: &[SqlCellValue],
    filter_cell: &SqlCellValue,
) -> SqlStatement {
    let assignments: Vec<String> = update_cells
        .iter()
        .map(|cell| format!("\t{} = {}", quote_ident(&cell.column_name), cell.sql_value))
        .collect();

    let mut sql = format!(
        "UPDATE\n\t{}\nSET\n{}\nWHERE\n\t{} = {}",
        quote_ident(table_name),
        assignments.join(",\n"),
        quote_ident(&filter_cell.column_name),
        filter_cell.sql_value,
    );

    let guarded = !is_trusted_row_filter(table_name, &filter_cell.column_name);
    if guarded {
        sql.push_str("\n\tAND ");
        sql.push_str(INERT_PREDICATE);
        sql.push(' ');
        sql.push_str(REVIEW_GUARD_COMMENT);
    }

    SqlStatement { sql, placeholder: None, guarded }
}

/// Build a DELETE for selected grid cells
///
/// [`SelectionShape::Column`] deletes by membership: the first cell
/// names the column and every cell contributes a value to an `IN` list.
/// [`SelectionShape::Row`] deletes one row by conjunction over its
/// cells. [`SelectionShape::Mixed`] and empty selections fail closed
/// with `WHERE 1 = 0` and set `guarded`.
#[must_use]
pub fn build_row_delete(
    table_name: &str,
    filter_cells: &[SqlCellValue],
    shape: SelectionShape,
) -> SqlStatement {
    let (predicate, guarded) = match shape {
        SelectionShape::Column => match filter_cells.first() {
            Some(first) => {
                let values: Vec<&str> =
                    filter_cells.iter().map(|cell| cell.sql_value.as_str()).collect();
                (format!("{} IN ({})", quote_ident(&first.column_name), values.join(", ")), false)
            }
            None => (INERT_PREDICATE.to_string(), true),
        },
        SelectionShape::Row => {
            if filter_cells.is_empty() {
                (INERT_PREDICATE.to_string(), true)
            } else {
                let conjuncts: Vec<String> = filter_cells
                    .iter()
                    .map(|cell| format!("{} = {}", quote_ident(&cell.column_name), cell.sql_value))
                    .collect();
                (format!("({})", conjuncts.join(" AND ")), false)
            }
        }
        SelectionShape::Mixed => (INERT_PREDICATE.to_string(), true),
    };

    SqlStatement {
        sql: format!("DELETE FROM\n\t{}\nWHERE\n\t{}", quote_ident(table_name), predicate),
        placeholder: None,
        guarded,
    }
}

/// Build a DELETE template for a table
///
/// The WHERE clause follows the same identity policy as
/// [`build_update`].
#[must_use]
pub fn build_delete(table: &TableDefinition) -> SqlStatement {
    let (filter, placeholder) = identity_filter(table);

    SqlStatement {
        sql: format!("DELETE FROM\n\t{}\nWHERE\n\t{}", quote_ident(&table.name), filter),
        placeholder: Some(placeholder),
        guarded: false,
    }
}

/// Build a COUNT(*) query for a table
#[must_use]
pub fn build_row_count(table_name: &str) -> SqlStatement {
    SqlStatement::complete(format!("SELECT\n\tCOUNT(*)\nFROM\n\t{}", quote_ident(table_name)))
}

/// Build a GRANT EXECUTE statement for a stored procedure
///
/// Without a grantee the statement reads `TO ?` and is tagged
/// [`Placeholder::Grantee`].
#[must_use]
pub fn build_grant_execute(procedure_name: &str, user_name: Option<&str>) -> SqlStatement {
    let procedure = quote_ident(procedure_name);
    match user_name.filter(|user| !user.trim().is_empty()) {
        Some(user) => SqlStatement::complete(format!(
            "GRANT EXECUTE\nON {}\nTO {}",
            procedure,
            quote_ident(user),
        )),
        None => SqlStatement {
            sql: format!("GRANT EXECUTE\nON {procedure}\nTO {PLACEHOLDER_TOKEN}"),
            placeholder: Some(Placeholder::Grantee),
            guarded: false,
        },
    }
}

/// WHERE filter for whole-table UPDATE/DELETE templates
///
/// Identity column present: `<id> = ?`, the caller fills in the key.
/// Absent: the bare `?` token, no safe filter is known.
fn identity_filter(table: &TableDefinition) -> (String, Placeholder) {
    match table.identity_column() {
        Some(id) => {
            (format!("{} = {}", quote_ident(&id.name), PLACEHOLDER_TOKEN), Placeholder::KeyValue)
        }
        None => (PLACEHOLDER_TOKEN.to_string(), Placeholder::Predicate),
    }
}
