use thiserror::Error;

/// Errors raised while loading a schema description or compiling it into a
/// relationship graph. None of these are retryable: the schema description
/// itself is wrong and must be fixed before rebuilding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    #[error("Duplicate table name `{table}` in schema description")]
    DuplicateTable { table: String },
    #[error("Foreign key on `{table}.{column}` references unknown table `{target}`")]
    UnknownTable {
        table: String,
        column: String,
        target: String,
    },
    #[error("Column `{column}` not found in table `{table}`")]
    UnknownColumn { column: String, table: String },
    #[error("Failed to read schema file: {error}")]
    ConfigRead { error: String },
    #[error("Failed to parse schema description: {error}")]
    ConfigParse { error: String },
}
