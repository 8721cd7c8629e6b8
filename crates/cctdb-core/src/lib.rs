//! Normalization engine for conformance test workbooks.
//!
//! A workbook holds one overview sheet of test cases and several category
//! sheets of test steps. [`convert`] collects the steps into a catalog keyed by
//! identifier, resolves each case's ordered step references against it, and
//! assigns surrogate keys to steps, parameters, cases and case-step links.

pub mod cases;
pub mod catalog;
pub mod convert;
pub mod error;
pub mod keys;
pub mod split;
pub mod types;

// Re-export main types and functions
pub use cases::assemble_cases;
pub use catalog::{build_catalog, StepCatalog};
pub use convert::convert;
pub use error::{ConvertError, LayoutError};
pub use keys::assign_keys;
pub use split::split_list;

pub use types::{
    cell_text, issue_codes, CaseRow, CategoryRule, CategorySheets, Cell, Conversion,
    ConvertOptions, DuplicateStepPolicy, Issue, IssueCount, KeyedDataset, LinkRow, ParameterRow,
    ResolvedLayout, RowId, Severity, Sheet, SheetRef, SourceRow, StepRow, Summary, TestCase,
    TestStep, Workbook, WorkbookLayout,
};
