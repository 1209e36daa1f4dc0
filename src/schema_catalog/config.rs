//! Schema description loading from YAML or JSON files.
//!
//! Schema files mirror the in-code [`SchemaDef`] shape:
//!
//! ```yaml
//! tables:
//!   - name: authors
//!     columns:
//!       - name: id
//!         type: integer
//!       - name: name
//!         type: string
//!   - name: books
//!     columns:
//!       - name: id
//!       - name: title
//!       - name: author_id
//!     foreign_keys:
//!       - column: author_id
//!         references_table: authors
//!         references_column: id
//! ```
//!
//! Loading performs serde-level structural validation only; dangling
//! references and duplicate table names are caught when the description is
//! compiled by [`SchemaGraph::build`](crate::join_graph::SchemaGraph::build).

use std::fs;
use std::path::Path;

use super::errors::SchemaError;
use super::schema::SchemaDef;

impl SchemaDef {
    /// Load a schema description from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let raw = fs::read_to_string(path.as_ref()).map_err(|e| SchemaError::ConfigRead {
            error: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Parse a schema description from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(raw).map_err(|e| SchemaError::ConfigParse {
            error: e.to_string(),
        })
    }

    /// Parse a schema description from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(raw).map_err(|e| SchemaError::ConfigParse {
            error: e.to_string(),
        })
    }
}
