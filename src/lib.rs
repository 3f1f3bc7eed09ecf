//! Querykit - SQL Statement Synthesis and Classification Engine
//!
//! Querykit is the text-producing core of a database browsing tool. Given a
//! table snapshot or edited grid cells it synthesizes ready-to-edit T-SQL
//! statements, and given arbitrary SQL text it classifies the statement's
//! intent so callers can gate confirmation prompts and result-grid display.
//!
//! # Core Principles
//! - Deterministic behavior (identical inputs → identical statement text)
//! - Fail closed (untrusted filters degrade to inert predicates, never to
//!   statements that touch every row)
//! - Explicit holes (unresolved values are tagged, not hidden in the text)
//! - No parsing (classification is a keyword heuristic with documented
//!   blind spots)
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`ident`] - Identifier quoting
//! - [`table`] - Table and column snapshot model
//! - [`literal`] - Scalar literal formatting and cell capture
//! - [`heuristics`] - Key column name heuristics
//! - [`synth`] - Statement synthesis engine
//! - [`catalog`] - Fixed catalog query templates
//! - [`classify`] - Statement intent classification
//!
//! # Public API
//! The everyday surface is re-exported at the crate root:
//! - Model: [`TableDefinition`], [`ColumnDefinition`], [`ColumnDataType`],
//!   [`SqlCellValue`]
//! - Synthesis: the `build_*` functions, [`SqlStatement`], [`Placeholder`],
//!   [`SelectLimit`], [`SelectionShape`]
//! - Catalog: [`CatalogQuery`]
//! - Errors: [`QuerykitError`]

pub mod error;       // Error handling infrastructure
pub mod ident;       // Identifier quoting
pub mod table;       // Table and column snapshot model
pub mod literal;     // Scalar literal formatting and cell capture
pub mod heuristics;  // Key column name heuristics
pub mod synth;       // Statement synthesis engine
pub mod catalog;     // Fixed catalog query templates
pub mod classify;    // Statement intent classification

// Re-export commonly used types for convenience
pub use error::{QuerykitError, Result};
pub use ident::quote_ident;
pub use table::{ColumnDataType, ColumnDefinition, TableDefinition};
pub use literal::{sql_literal, SqlCellValue};
pub use heuristics::{is_trusted_row_filter, trusted_id_columns};
pub use synth::{
    build_delete, build_grant_execute, build_insert, build_row_count, build_row_delete,
    build_row_update, build_select, build_update, Placeholder, SelectLimit, SelectionShape,
    SqlStatement, SELECT_TOP_ROWS,
};
pub use catalog::CatalogQuery;
pub use classify::{
    is_crud, is_destructive, is_structure_altering, returns_results, SHOW_RESULTS_DIRECTIVE,
};
