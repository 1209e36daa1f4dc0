//! Join plan value types.
//!
//! A resolved plan is plain data: the caller owns it outright and it holds
//! no reference back into the graph beyond the table and column names it
//! copies out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a join predicate: a column qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// One foreign-key relationship: the owning side holds the foreign-key
/// column, the referenced side is the column it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinDescriptor {
    pub owning: ColumnRef,
    pub referenced: ColumnRef,
}

impl JoinDescriptor {
    pub fn new(owning: ColumnRef, referenced: ColumnRef) -> Self {
        Self { owning, referenced }
    }

    /// The table on the opposite side of this relationship from `table`.
    /// Returns `None` if `table` is on neither side.
    pub fn other_table(&self, table: &str) -> Option<&str> {
        if self.owning.table == table {
            Some(&self.referenced.table)
        } else if self.referenced.table == table {
            Some(&self.owning.table)
        } else {
            None
        }
    }
}

impl fmt::Display for JoinDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.owning, self.referenced)
    }
}

/// One step of a join plan: bring `table` into the result set using the
/// predicate `on.owning = on.referenced`. Every table named by the predicate
/// is either `table` itself or one introduced by an earlier step (or the
/// start table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinStep {
    pub table: String,
    pub on: JoinDescriptor,
}

impl fmt::Display for JoinStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JOIN {} ON {}", self.table, self.on)
    }
}

/// An ordered sequence of join steps connecting a start table to an end
/// table. Produced fresh per resolve call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPlan {
    steps: Vec<JoinStep>,
}

impl JoinPlan {
    /// A plan with no steps: start and end are the same table.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<JoinStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[JoinStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a JoinPlan {
    type Item = &'a JoinStep;
    type IntoIter = std::slice::Iter<'a, JoinStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
