//! Scalar Literal Formatting
//!
//! Turns raw cell text into SQL literal text according to the column's
//! type family, and defines [`SqlCellValue`], the formatted-cell carrier
//! the row-level builders consume.
//!
//! # Fail-Safe Quoting
//! Families with a bare (unquoted) literal form fall back to a quoted,
//! escaped literal whenever the raw text does not parse as that form.
//! Malformed input therefore produces a wrong-typed literal the server
//! rejects, never text that escapes its literal position.

use serde::{Deserialize, Serialize};

use crate::table::ColumnDataType;

/// Format raw cell text as a SQL literal of the given type family
///
/// `None` formats as `NULL` for every family. Numeric, bit and binary
/// families emit a bare literal when the text parses, and a quoted
/// literal otherwise. All remaining families quote, doubling embedded
/// single quotes.
#[must_use]
pub fn sql_literal(raw: Option<&str>, data_type: &ColumnDataType) -> String {
    let Some(raw) = raw else {
        return "NULL".to_string();
    };

    let trimmed = raw.trim();
    match data_type {
        ColumnDataType::Integer => {
            if trimmed.parse::<i64>().is_ok() {
                trimmed.to_string()
            } else {
                quote_text(raw)
            }
        }
        ColumnDataType::Decimal => {
            if matches!(trimmed.parse::<f64>(), Ok(value) if value.is_finite()) {
                trimmed.to_string()
            } else {
                quote_text(raw)
            }
        }
        ColumnDataType::Bit => match trimmed.to_lowercase().as_str() {
            "0" | "false" => "0".to_string(),
            "1" | "true" => "1".to_string(),
            _ => quote_text(raw),
        },
        ColumnDataType::Binary => {
            if is_hex_literal(trimmed) {
                trimmed.to_string()
            } else {
                quote_text(raw)
            }
        }
        _ => quote_text(raw),
    }
}

/// Quote text as a SQL string literal, doubling embedded quotes
fn quote_text(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

/// Check for a well-formed `0x...` binary literal
fn is_hex_literal(text: &str) -> bool {
    let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) else {
        return false;
    };
    digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// One edited grid cell, captured with its formatted literal
///
/// Row-level builders place `sql_value` verbatim. The value is escaped
/// once, at capture time; the synthesis engine never re-escapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlCellValue {
    /// Column the cell belongs to, unquoted
    pub column_name: String,

    /// Raw cell text before formatting, when known (`None` means NULL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<String>,

    /// Literal text ready for direct placement into a statement
    pub sql_value: String,
}

impl SqlCellValue {
    /// Capture a cell, formatting the raw text for the column's family
    #[must_use]
    pub fn new(column_name: impl Into<String>, raw: Option<&str>, data_type: &ColumnDataType) -> Self {
        Self {
            column_name: column_name.into(),
            raw_value: raw.map(str::to_string),
            sql_value: sql_literal(raw, data_type),
        }
    }

    /// Wrap literal text that is already formatted
    ///
    /// The text is placed verbatim; use this for values formatted by an
    /// outer layer.
    #[must_use]
    pub fn from_literal(column_name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self { column_name: column_name.into(), raw_value: None, sql_value: literal.into() }
    }
}
