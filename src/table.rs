//! Table Metadata Model
//!
//! This module defines the snapshot types that describe a table to the
//! synthesis engine.
//!
//! # Snapshot Design
//! Definitions are immutable snapshots produced by an external catalog
//! layer. The engine only reads them. An empty column list marks a view
//! whose columns were not modeled; synthesis falls back to `SELECT *`
//! for such tables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{QuerykitError, Result};
use crate::ident::quote_ident;

/// Type family of a column, as seen by statement synthesis
///
/// The family decides how a column behaves in synthesized statements:
/// whether it may be written at all, and what literal form its values
/// take when formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnDataType {
    /// Whole-number types (int, bigint, smallint, tinyint)
    Integer,
    /// Fractional numeric types (decimal, numeric, float, real, money)
    Decimal,
    /// Boolean bit flag
    Bit,
    /// Character data of any width (char, varchar, nvarchar, text, xml)
    Text,
    /// Date and time types (date, datetime, datetime2, time)
    Date,
    /// uniqueidentifier
    Uuid,
    /// Raw byte types (binary, varbinary, image)
    Binary,
    /// rowversion / timestamp, maintained by the server
    RowVersion,
    /// Computed column, derived by the server
    Computed,
    /// Unrecognized type name, carried verbatim
    Other(String),
}

impl ColumnDataType {
    /// Classify a raw catalog type name into a family
    ///
    /// Length and precision suffixes are ignored, so `varchar(50)` and
    /// `decimal(18, 2)` classify by base name. Unknown names map to
    /// [`ColumnDataType::Other`]. Computed columns are not a type name;
    /// the catalog layer flags them separately.
    #[must_use]
    pub fn from_sql_type(raw: &str) -> Self {
        let base = raw.split('(').next().unwrap_or(raw).trim().to_lowercase();

        match base.as_str() {
            "int" | "bigint" | "smallint" | "tinyint" => Self::Integer,
            "decimal" | "numeric" | "float" | "real" | "money" | "smallmoney" => Self::Decimal,
            "bit" => Self::Bit,
            "char" | "varchar" | "nchar" | "nvarchar" | "text" | "ntext" | "xml" | "sysname" => {
                Self::Text
            }
            "date" | "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" | "time" => {
                Self::Date
            }
            "uniqueidentifier" => Self::Uuid,
            "binary" | "varbinary" | "image" => Self::Binary,
            "rowversion" | "timestamp" => Self::RowVersion,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Whether columns of this family must never appear in INSERT/UPDATE lists
    ///
    /// The server maintains these values itself; writing them is rejected
    /// by the engine, so templates omit the columns entirely.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::RowVersion | Self::Computed)
    }

    /// Placeholder literal shown for this family in statement templates
    ///
    /// The value is a starting point for hand editing, not a valid row:
    /// numeric families show `0`, text shows an empty string, temporal and
    /// uuid families show the corresponding server function call.
    #[must_use]
    pub const fn sample_literal(&self) -> &'static str {
        match self {
            Self::Integer | Self::Decimal | Self::Bit => "0",
            Self::Text | Self::Other(_) => "''",
            Self::Date => "GETDATE()",
            Self::Uuid => "NEWID()",
            Self::Binary => "0x00",
            Self::RowVersion | Self::Computed => "NULL",
        }
    }

    /// Get the family name as a string
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Bit => "bit",
            Self::Text => "text",
            Self::Date => "date",
            Self::Uuid => "uuid",
            Self::Binary => "binary",
            Self::RowVersion => "rowversion",
            Self::Computed => "computed",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One column of a table snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name, unquoted
    pub name: String,

    /// Type family
    pub data_type: ColumnDataType,

    /// Whether the server assigns this column's value (IDENTITY)
    #[serde(default)]
    pub is_identity: bool,

    /// Declared default, already formatted as SQL literal text
    ///
    /// Catalog defaults arrive pre-formatted (`'pending'`, `0`,
    /// `GETDATE()`), so templates place them verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ColumnDefinition {
    /// Create a plain column
    #[must_use]
    pub const fn new(name: String, data_type: ColumnDataType) -> Self {
        Self { name, data_type, is_identity: false, default: None }
    }

    /// Create an identity column
    #[must_use]
    pub const fn identity(name: String, data_type: ColumnDataType) -> Self {
        Self { name, data_type, is_identity: true, default: None }
    }

    /// Attach a pre-formatted default literal
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether INSERT/UPDATE templates include this column
    ///
    /// Identity columns and server-maintained families are excluded.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        !self.is_identity && !self.data_type.is_read_only()
    }

    /// Template value for this column: the declared default if present,
    /// otherwise the family's sample literal
    #[must_use]
    pub fn formatted_value(&self) -> String {
        match &self.default {
            Some(default) => default.clone(),
            None => self.data_type.sample_literal().to_string(),
        }
    }

    /// Quoted form of the column name for SELECT lists
    #[must_use]
    pub fn select_expression(&self) -> String {
        quote_ident(&self.name)
    }
}

/// Snapshot of one table's structure
///
/// Construct through [`TableDefinition::new`], which validates the
/// snapshot. A definition that deserializes from stored data is assumed
/// to have been validated when it was captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name, unquoted
    pub name: String,

    /// Columns in schema order; empty for views with unmodeled columns
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Create a validated table snapshot
    ///
    /// # Errors
    /// Returns an error when the table name is empty, a column name is
    /// empty, two columns share a name (case-insensitive), or more than
    /// one column is flagged as identity.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuerykitError::EmptyTableName);
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
        let mut identity: Option<&ColumnDefinition> = None;
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(QuerykitError::empty_column_name(name));
            }
            if !seen.insert(column.name.to_lowercase()) {
                return Err(QuerykitError::duplicate_column(name, &column.name));
            }
            if column.is_identity {
                if let Some(first) = identity {
                    return Err(QuerykitError::multiple_identity_columns(
                        name,
                        &first.name,
                        &column.name,
                    ));
                }
                identity = Some(column);
            }
        }

        Ok(Self { name, columns })
    }

    /// The identity column, if the table declares one
    #[must_use]
    pub fn identity_column(&self) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.is_identity)
    }

    /// Columns that INSERT/UPDATE templates write, in schema order
    pub fn writable_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|column| column.is_writable())
    }
}
