pub mod config;
pub mod errors;
pub mod schema;


// Re-export commonly used types
pub use errors::SchemaError;
pub use schema::{ColumnDef, ForeignKeyDef, SchemaDef, TableDef};
