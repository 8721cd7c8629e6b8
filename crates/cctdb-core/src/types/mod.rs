//! Types for the workbook conversion API.
//!
//! The conversion accepts an in-memory [`Workbook`] plus [`ConvertOptions`] and
//! returns a [`Conversion`]: surrogate-keyed rows for the step, parameter, case
//! and link tables together with any non-fatal issues.

mod common;
mod model;
mod request;
mod response;
mod workbook;

// Re-export all public types
pub use common::{issue_codes, Issue, IssueCount, Severity, SourceRow, Summary};
pub use model::{TestCase, TestStep};
pub use request::{ConvertOptions, DuplicateStepPolicy};
pub use response::{CaseRow, Conversion, KeyedDataset, LinkRow, ParameterRow, RowId, StepRow};
pub use workbook::{
    cell_text, CategoryRule, CategorySheets, Cell, ResolvedLayout, Sheet, SheetRef, Workbook,
    WorkbookLayout,
};
