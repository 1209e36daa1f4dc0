//! Join path resolution.
//!
//! Runs an unweighted shortest-path search (breadth-first) between two
//! tables and translates the node sequence into an ordered join plan. All
//! edges weigh the same; ties on path length fall to the search's visitation
//! order, which is deterministic because neighbor lists preserve edge
//! insertion order. Picking among equally-short routes by selectivity or row
//! count is a query optimizer's job, not this resolver's.

use std::collections::{HashMap, HashSet, VecDeque};

use log::warn;

use super::errors::ResolveError;
use super::graph::SchemaGraph;
use super::plan::{JoinPlan, JoinStep};

/// Resolve the join sequence connecting `start` to `end`.
///
/// Returns an empty plan when `start == end`: a query needs no joins to
/// reach the table it starts from. Resolution never mutates the graph, so
/// any number of calls may share one graph concurrently.
pub fn resolve(graph: &SchemaGraph, start: &str, end: &str) -> Result<JoinPlan, ResolveError> {
    for table in [start, end] {
        if !graph.contains_table(table) {
            return Err(ResolveError::UnknownTable {
                table: table.to_string(),
            });
        }
    }
    if start == end {
        return Ok(JoinPlan::empty());
    }

    let path = shortest_path(graph, start, end).ok_or_else(|| ResolveError::NoPath {
        start: start.to_string(),
        end: end.to_string(),
    })?;

    let mut introduced: HashSet<&str> = HashSet::new();
    introduced.insert(start);

    let mut steps = Vec::with_capacity(path.len() - 1);
    for pair in path.windows(2) {
        let (here, next) = (pair[0], pair[1]);
        let declared = graph
            .descriptors(here, next)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ResolveError::MissingEdge {
                from: here.to_string(),
                to: next.to_string(),
            })?;
        if declared.len() > 1 {
            warn!(
                "{} foreign keys declared between `{here}` and `{next}`; joining on the first-declared ({})",
                declared.len(),
                declared[0]
            );
        }
        // BFS paths are simple, so a repeat here means the graph or the
        // search is broken; surface it instead of dropping the step.
        if !introduced.insert(next) {
            return Err(ResolveError::RepeatedTable {
                table: next.to_string(),
            });
        }
        steps.push(JoinStep {
            table: next.to_string(),
            on: declared[0].clone(),
        });
    }

    Ok(JoinPlan::from_steps(steps))
}

/// Breadth-first search from `start` to `end`. Returns the node sequence
/// `[start, ..., end]`, or `None` when the tables sit in different connected
/// components.
fn shortest_path<'g>(graph: &'g SchemaGraph, start: &'g str, end: &str) -> Option<Vec<&'g str>> {
    let mut predecessor: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&previous) = predecessor.get(cursor) {
                path.push(previous);
                cursor = previous;
            }
            path.reverse();
            return Some(path);
        }
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                predecessor.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join_graph::plan::ColumnRef;
    use crate::schema_catalog::{ColumnDef, ForeignKeyDef, SchemaDef, TableDef};

    fn library_graph() -> SchemaGraph {
        let schema = SchemaDef::new(vec![
            TableDef::new(
                "authors",
                vec![ColumnDef::new("id"), ColumnDef::new("name")],
                vec![],
            ),
            TableDef::new(
                "catalogs",
                vec![ColumnDef::new("id"), ColumnDef::new("name")],
                vec![],
            ),
            TableDef::new(
                "books",
                vec![
                    ColumnDef::new("id"),
                    ColumnDef::new("title"),
                    ColumnDef::new("author_id"),
                    ColumnDef::new("catalog_id"),
                ],
                vec![
                    ForeignKeyDef::new("author_id", "authors", "id"),
                    ForeignKeyDef::new("catalog_id", "catalogs", "id"),
                ],
            ),
            TableDef::new("orphans", vec![ColumnDef::new("id")], vec![]),
        ]);
        SchemaGraph::build(&schema).unwrap()
    }

    #[test]
    fn test_authors_to_catalogs_goes_through_books() {
        let graph = library_graph();
        let plan = resolve(&graph, "authors", "catalogs").unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps()[0].table, "books");
        assert_eq!(
            plan.steps()[0].on.owning,
            ColumnRef::new("books", "author_id")
        );
        assert_eq!(plan.steps()[0].on.referenced, ColumnRef::new("authors", "id"));
        assert_eq!(plan.steps()[1].table, "catalogs");
        assert_eq!(
            plan.steps()[1].on.owning,
            ColumnRef::new("books", "catalog_id")
        );
        assert_eq!(
            plan.steps()[1].on.referenced,
            ColumnRef::new("catalogs", "id")
        );
    }

    #[test]
    fn test_direction_does_not_change_predicates() {
        let graph = library_graph();
        // Walking from the referenced side toward the owning side still
        // yields the declared (owning, referenced) orientation.
        let plan = resolve(&graph, "catalogs", "authors").unwrap();
        assert_eq!(
            plan.steps()[0].to_string(),
            "JOIN books ON books.catalog_id = catalogs.id"
        );
        assert_eq!(
            plan.steps()[1].to_string(),
            "JOIN authors ON books.author_id = authors.id"
        );
    }

    #[test]
    fn test_adjacent_tables_need_one_step() {
        let graph = library_graph();
        let plan = resolve(&graph, "authors", "books").unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps()[0].table, "books");
    }

    #[test]
    fn test_same_table_needs_no_joins() {
        let graph = library_graph();
        let plan = resolve(&graph, "books", "books").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_unknown_table_is_reported() {
        let graph = library_graph();
        let err = resolve(&graph, "authors", "reviews").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownTable {
                table: "reviews".to_string()
            }
        );
        let err = resolve(&graph, "reviews", "authors").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownTable {
                table: "reviews".to_string()
            }
        );
    }

    #[test]
    fn test_disconnected_tables_have_no_path() {
        let graph = library_graph();
        let err = resolve(&graph, "orphans", "books").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoPath {
                start: "orphans".to_string(),
                end: "books".to_string(),
            }
        );
    }

    #[test]
    fn test_plans_are_deterministic() {
        let graph = library_graph();
        let first = resolve(&graph, "authors", "catalogs").unwrap();
        let second = resolve(&graph, "authors", "catalogs").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_table_is_introduced_exactly_once() {
        // A four-table chain: regions <- countries <- cities <- addresses.
        let schema = SchemaDef::new(vec![
            TableDef::new("regions", vec![ColumnDef::new("id")], vec![]),
            TableDef::new(
                "countries",
                vec![ColumnDef::new("id"), ColumnDef::new("region_id")],
                vec![ForeignKeyDef::new("region_id", "regions", "id")],
            ),
            TableDef::new(
                "cities",
                vec![ColumnDef::new("id"), ColumnDef::new("country_id")],
                vec![ForeignKeyDef::new("country_id", "countries", "id")],
            ),
            TableDef::new(
                "addresses",
                vec![ColumnDef::new("id"), ColumnDef::new("city_id")],
                vec![ForeignKeyDef::new("city_id", "cities", "id")],
            ),
        ]);
        let graph = SchemaGraph::build(&schema).unwrap();
        let plan = resolve(&graph, "regions", "addresses").unwrap();

        let introduced: Vec<&str> = plan.steps().iter().map(|s| s.table.as_str()).collect();
        assert_eq!(introduced, vec!["countries", "cities", "addresses"]);
    }

    #[test]
    fn test_shortest_route_wins_over_longer_alternative() {
        // orders -> customers directly, and also orders -> invoices ->
        // customers; the one-step route must win.
        let schema = SchemaDef::new(vec![
            TableDef::new("customers", vec![ColumnDef::new("id")], vec![]),
            TableDef::new(
                "invoices",
                vec![ColumnDef::new("id"), ColumnDef::new("customer_id")],
                vec![ForeignKeyDef::new("customer_id", "customers", "id")],
            ),
            TableDef::new(
                "orders",
                vec![
                    ColumnDef::new("id"),
                    ColumnDef::new("customer_id"),
                    ColumnDef::new("invoice_id"),
                ],
                vec![
                    ForeignKeyDef::new("customer_id", "customers", "id"),
                    ForeignKeyDef::new("invoice_id", "invoices", "id"),
                ],
            ),
        ]);
        let graph = SchemaGraph::build(&schema).unwrap();
        let plan = resolve(&graph, "orders", "customers").unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.steps()[0].to_string(),
            "JOIN customers ON orders.customer_id = customers.id"
        );
    }

    #[test]
    fn test_ambiguous_pair_joins_on_first_declared_key() {
        let schema = SchemaDef::new(vec![
            TableDef::new("users", vec![ColumnDef::new("id")], vec![]),
            TableDef::new(
                "messages",
                vec![
                    ColumnDef::new("id"),
                    ColumnDef::new("sender_id"),
                    ColumnDef::new("recipient_id"),
                ],
                vec![
                    ForeignKeyDef::new("sender_id", "users", "id"),
                    ForeignKeyDef::new("recipient_id", "users", "id"),
                ],
            ),
        ]);
        let graph = SchemaGraph::build(&schema).unwrap();
        let plan = resolve(&graph, "users", "messages").unwrap();
        assert_eq!(
            plan.steps()[0].to_string(),
            "JOIN messages ON messages.sender_id = users.id"
        );
    }
}
