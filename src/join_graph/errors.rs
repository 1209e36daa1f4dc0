use thiserror::Error;

/// Errors raised while resolving a join path against a built graph.
///
/// `UnknownTable` and `NoPath` are normal caller-facing conditions. The
/// remaining variants indicate a broken invariant between the graph builder
/// and the search routine; they are surfaced rather than swallowed because
/// they signal a bug, not bad input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    #[error("Table `{table}` is not present in the schema graph")]
    UnknownTable { table: String },
    #[error("No join path connects `{start}` to `{end}`")]
    NoPath { start: String, end: String },
    #[error("Join path introduced table `{table}` more than once")]
    RepeatedTable { table: String },
    #[error("No join descriptor registered for adjacent tables `{from}` and `{to}`")]
    MissingEdge { from: String, to: String },
}
