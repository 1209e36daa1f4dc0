//! Schema description types.
//!
//! A [`SchemaDef`] is the explicit, enumerable input consumed by the graph
//! builder: a list of tables, each with its columns and its foreign-key
//! constraints. It is a plain value - it carries no connection handle and is
//! never mutated by the builder or the resolver.

use serde::{Deserialize, Serialize};

/// A full schema description: an ordered collection of table definitions.
///
/// Order matters only for reproducibility - graph nodes and edges are
/// inserted in definition order so repeated builds yield identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDef {
    pub tables: Vec<TableDef>,
}

impl SchemaDef {
    pub fn new(tables: Vec<TableDef>) -> Self {
        Self { tables }
    }

    /// Look up a table definition by name.
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// One table: its name, columns, and outgoing foreign-key constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDef>,
}

impl TableDef {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnDef>,
        foreign_keys: Vec<ForeignKeyDef>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            foreign_keys,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// One column. The type is free-form and optional - the resolver only needs
/// names, but schema files usually carry types for documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }
}

/// One foreign-key constraint: `column` in the owning table references
/// `references_table.references_column`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyDef {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

impl ForeignKeyDef {
    pub fn new(
        column: impl Into<String>,
        references_table: impl Into<String>,
        references_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            references_table: references_table.into(),
            references_column: references_column.into(),
        }
    }
}
