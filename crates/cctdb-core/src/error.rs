//! Error types for workbook conversion.
//!
//! # Error Handling Strategy
//!
//! Two complementary patterns are used:
//!
//! - [`ConvertError`]: fatal conditions that abort the whole run. No dataset is
//!   produced, so callers never see a partially resolved result.
//!
//! - [`crate::types::Issue`]: non-fatal findings (blank rows, duplicates resolved
//!   by an explicit policy) collected while converting and returned alongside
//!   the successful result.

use thiserror::Error;

use crate::types::{SheetRef, SourceRow};

/// A workbook layout that cannot be applied to the workbook at hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("sheet {sheet} not found (available sheets: {available})")]
    SheetNotFound { sheet: SheetRef, available: String },

    #[error("no category sheets selected (overview sheet is '{overview}')")]
    NoCategorySheets { overview: String },

    #[error("sheet '{name}' cannot be both the overview and a category sheet")]
    OverviewAsCategory { name: String },
}

/// Fatal conversion error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("test case '{case}' ({location}) references unknown step '{reference}'")]
    UnknownStepReference {
        case: String,
        reference: String,
        location: SourceRow,
    },

    #[error("test case '{case}' ({location}) has an empty step reference at position {position}")]
    EmptyStepReference {
        case: String,
        /// Zero-based position within the reference cell
        position: usize,
        location: SourceRow,
    },

    #[error("{location} lists steps '{references}' but has no test case identifier")]
    CaseWithoutIdentifier {
        references: String,
        location: SourceRow,
    },

    #[error("step '{id}' is defined more than once: {first} and {second}")]
    DuplicateStep {
        id: String,
        first: SourceRow,
        second: SourceRow,
    },
}
