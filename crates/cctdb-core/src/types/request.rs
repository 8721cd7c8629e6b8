//! Options controlling a workbook conversion.

use serde::{Deserialize, Serialize};

use super::workbook::WorkbookLayout;

/// What to do when two category rows define the same step identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateStepPolicy {
    /// Abort the conversion, naming both definitions
    #[default]
    Reject,
    /// Keep the later definition at the first definition's catalog position
    LastWins,
    /// Keep the first definition and ignore later ones
    FirstWins,
}

/// Options for [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Which sheets hold the overview and the step definitions
    pub layout: WorkbookLayout,

    /// Collision handling for step identifiers across category sheets
    pub on_duplicate: DuplicateStepPolicy,
}
