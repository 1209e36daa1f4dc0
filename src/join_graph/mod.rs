pub mod dot;
pub mod errors;
pub mod graph;
pub mod plan;
pub mod resolver;

// Re-export commonly used types
pub use errors::ResolveError;
pub use graph::SchemaGraph;
pub use plan::{ColumnRef, JoinDescriptor, JoinPlan, JoinStep};
pub use resolver::resolve;
