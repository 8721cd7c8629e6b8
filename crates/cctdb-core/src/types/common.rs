//! Common types shared between options, the domain model and conversion results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a record came from in the source workbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRow {
    /// Sheet name as it appears in the workbook
    pub sheet: String,
    /// Row number (1-indexed, as displayed by spreadsheet applications)
    pub row: usize,
}

impl SourceRow {
    pub fn new(sheet: impl Into<String>, row: usize) -> Self {
        Self {
            sheet: sheet.into(),
            row,
        }
    }
}

impl fmt::Display for SourceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet '{}' row {}", self.sheet, self.row)
    }
}

/// A non-fatal finding reported alongside a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// Machine-readable issue code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Optional: workbook location the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceRow>,
}

impl Issue {
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceRow) -> Self {
        self.location = Some(location);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// Counts of issues by severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    /// Number of warning-level issues
    pub warnings: usize,
    /// Number of info-level issues
    pub infos: usize,
}

impl IssueCount {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues
            .iter()
            .fold(Self::default(), |mut count, issue| {
                match issue.severity {
                    Severity::Warning => count.warnings += 1,
                    Severity::Info => count.infos += 1,
                }
                count
            })
    }
}

/// Summary statistics for a conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of category sheets scanned for steps
    pub category_sheet_count: usize,

    /// Distinct steps in the catalog
    pub step_count: usize,

    /// Step parameter rows
    pub parameter_count: usize,

    /// Test cases read from the overview sheet
    pub case_count: usize,

    /// Case-to-step links
    pub link_count: usize,

    /// Issue counts by severity
    pub issue_count: IssueCount,
}

/// Machine-readable issue codes.
pub mod issue_codes {
    pub const DUPLICATE_STEP: &str = "DUPLICATE_STEP";
    pub const DUPLICATE_CASE: &str = "DUPLICATE_CASE";
    pub const BLANK_STEP_ROW: &str = "BLANK_STEP_ROW";
    pub const BLANK_CASE_ROW: &str = "BLANK_CASE_ROW";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_count_tallies_by_severity() {
        let issues = vec![
            Issue::warning(issue_codes::DUPLICATE_STEP, "dup"),
            Issue::info(issue_codes::BLANK_STEP_ROW, "blank"),
            Issue::info(issue_codes::BLANK_CASE_ROW, "blank"),
        ];

        let count = IssueCount::from_issues(&issues);
        assert_eq!(count.warnings, 1);
        assert_eq!(count.infos, 2);
    }

    #[test]
    fn source_row_display_names_sheet_and_row() {
        let source = SourceRow::new("BER-TLV", 7);
        assert_eq!(source.to_string(), "sheet 'BER-TLV' row 7");
    }

    #[test]
    fn issue_serializes_without_empty_location() {
        let issue = Issue::warning(issue_codes::DUPLICATE_CASE, "twice");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "warning");
        assert!(json.get("location").is_none());
    }
}
