//! Joingraph - automatic join-path resolution over relational schemas
//!
//! This crate answers one question: given a schema of tables connected by
//! foreign keys, which joins connect table A to table B?
//!
//! It does this in two stages:
//! - A schema description (tables, columns, foreign-key constraints) is
//!   compiled into an undirected relationship graph, one node per table and
//!   one edge per foreign-key pair, each edge carrying the exact column pair
//!   implementing the relationship.
//! - A resolver runs a shortest-path search over that graph and translates
//!   the resulting node sequence into an ordered list of join steps.
//!
//! The graph is built once per schema version and is read-only afterwards;
//! any number of resolve calls may share it concurrently. The crate never
//! connects to a database and never generates SQL text - it hands the caller
//! a structured join plan and stops there.

pub mod join_graph;
pub mod schema_catalog;
