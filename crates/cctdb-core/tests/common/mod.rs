//! Shared helpers for building in-memory workbooks in integration tests.

#![allow(dead_code)]

use cctdb_core::{Cell, Sheet, Workbook};

pub const STEP_HEADER: [&str; 5] = ["Id", "Class", "Method", "Description", "Parameters"];
pub const OVERVIEW_HEADER: [&str; 6] = [
    "Document",
    "Test Id",
    "Test Case Description",
    "Atoms",
    "Comments",
    "Container ID",
];

pub fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::from(*c)).collect()
}

pub fn sheet(name: &str, header: &[&str], rows: &[&[&str]]) -> Sheet {
    let mut sheet = Sheet::new(name);
    sheet.push_row(row(header));
    for r in rows {
        sheet.push_row(row(r));
    }
    sheet
}

pub fn category(name: &str, rows: &[&[&str]]) -> Sheet {
    sheet(name, &STEP_HEADER, rows)
}

pub fn overview(rows: &[&[&str]]) -> Sheet {
    sheet("Step Overview", &OVERVIEW_HEADER, rows)
}

/// Workbook in the legacy positional shape: a cover sheet, the overview, then categories.
pub fn legacy_workbook(overview_sheet: Sheet, categories: Vec<Sheet>) -> Workbook {
    let mut workbook = Workbook::new(vec![Sheet::new("Cover"), overview_sheet]);
    for sheet in categories {
        workbook.push(sheet);
    }
    workbook
}
