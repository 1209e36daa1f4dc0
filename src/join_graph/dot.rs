//! Graphviz rendering of the schema relationship graph.
//!
//! Built entirely on [`SchemaGraph::edges`]; rendering reads the graph and
//! never influences resolution.

use super::graph::SchemaGraph;

/// Render the graph as Graphviz DOT source. Nodes appear in
/// schema-definition order, edges in declaration order, each edge labeled
/// with its join predicate.
pub fn render(graph: &SchemaGraph) -> String {
    let mut out = String::from("graph schema {\n");
    for table in graph.tables() {
        out.push_str(&format!("    \"{}\";\n", table));
    }
    for (a, b, descriptor) in graph.edges() {
        out.push_str(&format!(
            "    \"{}\" -- \"{}\" [label=\"{}\"];\n",
            a, b, descriptor
        ));
    }
    out.push_str("}\n");
    out
}
