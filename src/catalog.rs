//! Catalog Query Templates
//!
//! Fixed SQL texts for populating the object browser: database lists,
//! tables with row counts, stored procedures, views, and column search.
//! Each template is a named constant keyed by purpose, so calling layers
//! select by [`CatalogQuery`] variant instead of embedding SQL.
//!
//! The texts target the SQL Server catalog (`sys.*` views and the legacy
//! `sysobjects` family). Porting to another engine means swapping the
//! texts in this module and nothing else.

use serde::{Deserialize, Serialize};

/// Parameter name the column-search template expects to be bound
pub const SEARCH_PARAM: &str = "@SearchString";

/// Purpose-keyed catalog introspection queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogQuery {
    /// User databases on the server, excluding the four system databases
    Databases,
    /// User tables with their schema and live row counts
    TablesWithRowCounts,
    /// Stored procedures with definition text chunks
    StoredProcedures,
    /// Views with their definitions
    Views,
    /// Columns across user tables matching a name pattern
    FindColumns,
}

impl CatalogQuery {
    /// Every template, in menu order
    pub const ALL: [Self; 5] = [
        Self::Databases,
        Self::TablesWithRowCounts,
        Self::StoredProcedures,
        Self::Views,
        Self::FindColumns,
    ];

    /// The SQL text of this template
    ///
    /// [`CatalogQuery::FindColumns`] contains the [`SEARCH_PARAM`]
    /// parameter; all other templates are ready to run.
    #[must_use]
    pub const fn sql(&self) -> &'static str {
        match self {
            Self::Databases => concat!(
                "SELECT\n",
                "\t[name]\n",
                "FROM\n",
                "\tsys.databases\n",
                "WHERE\n",
                "\t[name] NOT IN ('master', 'tempdb', 'model', 'msdb')\n",
                "ORDER BY\n",
                "\t[name]",
            ),
            Self::TablesWithRowCounts => concat!(
                "SELECT\n",
                "\ts.name AS [schema],\n",
                "\tt.name AS [table],\n",
                "\tSUM(p.rows) AS [rows]\n",
                "FROM\n",
                "\tsys.tables t\n",
                "\tINNER JOIN sys.schemas s ON t.schema_id = s.schema_id\n",
                "\tINNER JOIN sys.partitions p ON t.object_id = p.object_id\n",
                "WHERE\n",
                "\tp.index_id < 2\n",
                "\tAND t.is_ms_shipped = 0\n",
                "GROUP BY\n",
                "\ts.name, t.name\n",
                "ORDER BY\n",
                "\ts.name, t.name",
            ),
            Self::StoredProcedures => concat!(
                "SELECT\n",
                "\to.name AS [procedure],\n",
                "\tc.text AS [definition],\n",
                "\tc.colid\n",
                "FROM\n",
                "\tsysobjects o\n",
                "\tINNER JOIN syscomments c ON o.id = c.id\n",
                "WHERE\n",
                "\to.type = 'P'\n",
                "\tAND o.category = 0\n",
                "ORDER BY\n",
                "\to.name, c.colid",
            ),
            Self::Views => concat!(
                "SELECT\n",
                "\to.name AS [view],\n",
                "\tCOALESCE(m.definition, '') AS [definition]\n",
                "FROM\n",
                "\tsys.objects o\n",
                "\tLEFT JOIN sys.sql_modules m ON o.object_id = m.object_id\n",
                "WHERE\n",
                "\to.type = 'V'\n",
                "ORDER BY\n",
                "\to.name",
            ),
            Self::FindColumns => concat!(
                "SELECT\n",
                "\to.name AS [table],\n",
                "\tc.name AS [column],\n",
                "\tt.name + ' (' + CAST(c.length AS VARCHAR) + ')' AS [definition]\n",
                "FROM\n",
                "\tsysobjects o\n",
                "\tINNER JOIN syscolumns c ON o.id = c.id\n",
                "\tINNER JOIN systypes t ON c.xtype = t.xusertype\n",
                "WHERE\n",
                "\to.xtype = 'U'\n",
                "\tAND o.name NOT LIKE 'sys%'\n",
                "\tAND c.name LIKE @SearchString\n",
                "ORDER BY\n",
                "\to.name, c.name",
            ),
        }
    }

    /// Get the template name as a string
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Databases => "databases",
            Self::TablesWithRowCounts => "tables_with_row_counts",
            Self::StoredProcedures => "stored_procedures",
            Self::Views => "views",
            Self::FindColumns => "find_columns",
        }
    }
}

impl std::fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
