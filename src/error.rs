//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout querykit.
//! Errors only occur at the model boundary, when a table snapshot fails
//! validation. Statement synthesis and classification are total: they
//! degrade to placeholders or fail-closed predicates instead of erroring.
//!
//! # Error Categories
//! - `EmptyTableName`: A table snapshot without a name
//! - `EmptyColumnName`: A column without a name
//! - `DuplicateColumn`: Two columns sharing a name (case-insensitive)
//! - `MultipleIdentityColumns`: More than one column flagged as identity

use thiserror::Error;

/// Main error type for querykit operations
#[derive(Error, Debug)]
pub enum QuerykitError {
    /// Table snapshot has an empty name
    #[error("Table name must not be empty")]
    EmptyTableName,

    /// Column in a table snapshot has an empty name
    #[error("Table '{table}' has a column with an empty name")]
    EmptyColumnName { table: String },

    /// Two columns share a name, compared case-insensitively
    #[error("Table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },

    /// More than one column is flagged as the identity column
    #[error("Table '{table}' declares multiple identity columns: '{first}' and '{second}'")]
    MultipleIdentityColumns { table: String, first: String, second: String },
}

impl QuerykitError {
    /// Convert error to error code string for diagnostics
    ///
    /// Error codes are stable and suitable for programmatic handling by callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTableName => "EMPTY_TABLE_NAME",
            Self::EmptyColumnName { .. } => "EMPTY_COLUMN_NAME",
            Self::DuplicateColumn { .. } => "DUPLICATE_COLUMN",
            Self::MultipleIdentityColumns { .. } => "MULTIPLE_IDENTITY_COLUMNS",
        }
    }

    /// Get human-readable error message
    #[must_use]
    pub fn message(&self) -> String {
        // Use Display implementation from thiserror
        self.to_string()
    }

    /// Create an empty-column-name error
    pub fn empty_column_name(table: impl Into<String>) -> Self {
        Self::EmptyColumnName { table: table.into() }
    }

    /// Create a duplicate-column error
    pub fn duplicate_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateColumn { table: table.into(), column: column.into() }
    }

    /// Create a multiple-identity-columns error
    pub fn multiple_identity_columns(
        table: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::MultipleIdentityColumns {
            table: table.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Result type alias for querykit operations
pub type Result<T> = std::result::Result<T, QuerykitError>;
