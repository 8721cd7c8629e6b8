//! In-memory workbook model and sheet layout declarations.
//!
//! Readers for concrete spreadsheet formats live outside this crate; they fill a
//! [`Workbook`] with [`Sheet`]s and hand it to [`crate::convert`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;

/// Largest magnitude at which an integral float is still printed as an integer.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Stringifies the cell the way it is shown in a spreadsheet.
    ///
    /// Integral numbers drop their fractional part (`5.0` becomes `"5"`), so
    /// numeric identifiers and parameters read back as typed.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < INTEGRAL_DISPLAY_LIMIT {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Cell::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// Returns the trimmed text of column `col`, treating missing cells as empty.
pub fn cell_text(row: &[Cell], col: usize) -> String {
    row.get(col)
        .map(|cell| cell.to_text().trim().to_string())
        .unwrap_or_default()
}

/// A named grid of cells. Row 0 is the header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterates data rows (header skipped) with their 1-indexed row numbers.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Finds a sheet by name: exact match first, then ASCII case-insensitive.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sheets
            .iter()
            .position(|s| s.name == name)
            .or_else(|| {
                self.sheets
                    .iter()
                    .position(|s| s.name.eq_ignore_ascii_case(name))
            })
    }

    /// Resolves a sheet reference to its index and sheet.
    pub fn resolve(&self, sheet: &SheetRef) -> Result<(usize, &Sheet), LayoutError> {
        let index = match sheet {
            SheetRef::Name(name) => self.position(name),
            SheetRef::Index(index) => (*index < self.sheets.len()).then_some(*index),
        };

        index
            .map(|idx| (idx, &self.sheets[idx]))
            .ok_or_else(|| LayoutError::SheetNotFound {
                sheet: sheet.clone(),
                available: self.sheet_names().join(", "),
            })
    }
}

/// Reference to a sheet by name or zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetRef {
    Index(usize),
    Name(String),
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetRef::Index(index) => write!(f, "#{index}"),
            SheetRef::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<&str> for SheetRef {
    fn from(value: &str) -> Self {
        SheetRef::Name(value.to_string())
    }
}

impl From<usize> for SheetRef {
    fn from(value: usize) -> Self {
        SheetRef::Index(value)
    }
}

/// Which sheets hold step definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySheets {
    /// Explicit list, scanned in the given order
    Listed(Vec<SheetRef>),
    Rule(CategoryRule),
}

impl Default for CategorySheets {
    fn default() -> Self {
        CategorySheets::Rule(CategoryRule::AllAfterOverview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CategoryRule {
    /// Every sheet positioned after the overview sheet, in workbook order
    #[default]
    AllAfterOverview,
}

/// Declares which sheet is the case overview and which hold step definitions.
///
/// The default layout treats the second sheet as the overview and every sheet
/// after it as a category sheet. Naming sheets explicitly is preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkbookLayout {
    pub overview: SheetRef,
    pub categories: CategorySheets,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self {
            overview: SheetRef::Index(1),
            categories: CategorySheets::default(),
        }
    }
}

/// Sheets selected by a [`WorkbookLayout`].
#[derive(Debug)]
pub struct ResolvedLayout<'a> {
    pub overview: &'a Sheet,
    pub categories: Vec<&'a Sheet>,
}

impl WorkbookLayout {
    pub fn resolve<'a>(&self, workbook: &'a Workbook) -> Result<ResolvedLayout<'a>, LayoutError> {
        let (overview_idx, overview) = workbook.resolve(&self.overview)?;

        let categories = match &self.categories {
            CategorySheets::Rule(CategoryRule::AllAfterOverview) => workbook
                .sheets()
                .iter()
                .skip(overview_idx + 1)
                .collect::<Vec<_>>(),
            CategorySheets::Listed(refs) => {
                let mut sheets = Vec::with_capacity(refs.len());
                for sheet_ref in refs {
                    let (idx, sheet) = workbook.resolve(sheet_ref)?;
                    if idx == overview_idx {
                        return Err(LayoutError::OverviewAsCategory {
                            name: sheet.name().to_string(),
                        });
                    }
                    sheets.push(sheet);
                }
                sheets
            }
        };

        if categories.is_empty() {
            return Err(LayoutError::NoCategorySheets {
                overview: overview.name().to_string(),
            });
        }

        Ok(ResolvedLayout {
            overview,
            categories,
        })
    }
}
