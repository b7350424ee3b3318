use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A department row. `name` is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Department {
    pub dept_id: i64,
    pub name: String,
    /// Employee heading the department.
    pub head_id: Option<i64>,
}
