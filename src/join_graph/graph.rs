//! The schema relationship graph.
//!
//! One node per table, one undirected edge per foreign-key pair. Each edge
//! carries every [`JoinDescriptor`] declared between its two tables, in
//! declaration order. The graph is immutable once built; rebuilding from a
//! new schema description is the only lifecycle event.

use std::collections::HashMap;

use log::debug;

use crate::schema_catalog::{SchemaDef, SchemaError};

use super::plan::{ColumnRef, JoinDescriptor};

#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    /// Node names in schema-definition order.
    nodes: Vec<String>,
    /// Neighbor lists, each in edge-insertion order. Determinism of the
    /// resolver's tie-breaking depends on this ordering.
    adjacency: HashMap<String, Vec<String>>,
    /// Canonical (sorted) table pair -> declared descriptors, in order.
    descriptors: HashMap<(String, String), Vec<JoinDescriptor>>,
    /// Canonical pairs in first-declaration order, for stable enumeration.
    edge_order: Vec<(String, String)>,
}

impl SchemaGraph {
    /// Compile a schema description into a relationship graph.
    ///
    /// Fails if a table name appears twice, or if a foreign key names a
    /// column or table that does not exist in the description. Validation
    /// happens here, once, so resolution never has to re-check the schema.
    pub fn build(schema: &SchemaDef) -> Result<SchemaGraph, SchemaError> {
        let mut graph = SchemaGraph::default();

        for table in &schema.tables {
            if graph.adjacency.contains_key(&table.name) {
                return Err(SchemaError::DuplicateTable {
                    table: table.name.clone(),
                });
            }
            graph.nodes.push(table.name.clone());
            graph.adjacency.insert(table.name.clone(), Vec::new());
        }

        for table in &schema.tables {
            for fk in &table.foreign_keys {
                if !table.has_column(&fk.column) {
                    return Err(SchemaError::UnknownColumn {
                        column: fk.column.clone(),
                        table: table.name.clone(),
                    });
                }
                let target = schema.table(&fk.references_table).ok_or_else(|| {
                    SchemaError::UnknownTable {
                        table: table.name.clone(),
                        column: fk.column.clone(),
                        target: fk.references_table.clone(),
                    }
                })?;
                if !target.has_column(&fk.references_column) {
                    return Err(SchemaError::UnknownColumn {
                        column: fk.references_column.clone(),
                        table: target.name.clone(),
                    });
                }
                if table.name == target.name {
                    // Self-referencing keys never contribute to a path
                    // between two distinct tables.
                    debug!(
                        "Skipping self-referencing foreign key `{}.{}`",
                        table.name, fk.column
                    );
                    continue;
                }
                graph.add_edge(JoinDescriptor::new(
                    ColumnRef::new(&table.name, &fk.column),
                    ColumnRef::new(&target.name, &fk.references_column),
                ));
            }
        }

        Ok(graph)
    }

    fn add_edge(&mut self, descriptor: JoinDescriptor) {
        let a = descriptor.owning.table.clone();
        let b = descriptor.referenced.table.clone();
        let key = Self::pair_key(&a, &b);
        let declared = self.descriptors.entry(key.clone()).or_default();
        if declared.is_empty() {
            // First foreign key between this pair: wire up adjacency once.
            self.adjacency.entry(a.clone()).or_default().push(b.clone());
            self.adjacency.entry(b).or_default().push(a);
            self.edge_order.push(key);
        }
        declared.push(descriptor);
    }

    fn pair_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Table names in schema-definition order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// Neighbors of `name` in edge-insertion order. Unknown tables have no
    /// neighbors.
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every descriptor declared between `a` and `b`, in declaration order,
    /// regardless of argument order. `None` if the tables share no edge.
    pub fn descriptors(&self, a: &str, b: &str) -> Option<&[JoinDescriptor]> {
        self.descriptors
            .get(&Self::pair_key(a, b))
            .map(Vec::as_slice)
    }

    /// Read-only enumeration of `(table, table, descriptor)` triples in
    /// first-declaration order, for diagnostics and rendering. Ambiguous
    /// pairs yield one triple per declared descriptor.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &JoinDescriptor)> {
        self.edge_order.iter().flat_map(move |key| {
            self.descriptors
                .get(key)
                .into_iter()
                .flatten()
                .map(move |d| (key.0.as_str(), key.1.as_str(), d))
        })
    }
}
