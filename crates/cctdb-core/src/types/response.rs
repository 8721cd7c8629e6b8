//! Keyed relational rows produced by a conversion.

use serde::{Deserialize, Serialize};

use super::common::{Issue, Summary};

/// Surrogate key type shared by all id-spaces.
pub type RowId = i64;

/// A row of the `TestSteps` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRow {
    pub id: RowId,
    /// Natural step identifier
    pub identifier: String,
    pub class_name: String,
    pub method: String,
    pub description: String,
    pub parameter_count: usize,
}

/// A row of the `TestStepParameters` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRow {
    pub id: RowId,
    pub step_id: RowId,
    pub value: String,
    /// Zero-based position within the step's parameter list
    pub order: usize,
}

/// A row of the `TestCases` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRow {
    pub id: RowId,
    pub identifier: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// A row of the `TestsToSteps` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRow {
    pub id: RowId,
    pub case_id: RowId,
    pub step_id: RowId,
    /// Zero-based execution order within the case
    pub order: usize,
}

/// The four keyed record sets, each in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyedDataset {
    pub steps: Vec<StepRow>,
    pub parameters: Vec<ParameterRow>,
    pub cases: Vec<CaseRow>,
    pub links: Vec<LinkRow>,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub dataset: KeyedDataset,

    /// Non-fatal findings, in the order they were encountered
    pub issues: Vec<Issue>,

    pub summary: Summary,
}
