//! Test steps and test cases as read from the workbook.

use serde::{Deserialize, Serialize};

use super::common::SourceRow;

/// An atomic, reusable test operation defined on a category sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    /// Natural key, unique within a run
    pub id: String,
    /// Implementing class name
    pub class_name: String,
    /// Implementing method name
    pub method: String,
    /// Free-text description
    pub description: String,
    /// Parameters in declaration order
    pub parameters: Vec<String>,
    pub location: SourceRow,
}

/// A test scenario from the overview sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Natural key
    pub id: String,
    pub description: String,
    /// Container/group tag, carried through uninterpreted
    pub container: String,
    /// Step identifiers in execution order; each one exists in the catalog
    pub steps: Vec<String>,
    pub location: SourceRow,
}
