//! Workbook reading through calamine.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use cctdb_core::{Cell, Sheet, Workbook};
use std::path::Path;
use tracing::debug;

/// Read every sheet of a spreadsheet file into an in-memory [`Workbook`].
///
/// The format is chosen from the file extension. Sheets keep their workbook
/// order, which positional layouts depend on.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    let mut source = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let names = source.sheet_names().to_vec();
    if names.is_empty() {
        bail!("Workbook contains no sheets: {}", path.display());
    }

    let mut workbook = Workbook::default();
    for name in names {
        let range = source
            .worksheet_range(&name)
            .with_context(|| format!("Failed to read sheet '{name}'"))?;
        let sheet = sheet_from_range(&name, &range);
        debug!(sheet = %name, rows = sheet.rows().len(), "read sheet");
        workbook.push(sheet);
    }

    Ok(workbook)
}

/// Convert a calamine range into a [`Sheet`] whose row and column indices are
/// absolute, padding the rows and columns that precede the used area.
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let Some((first_row, first_col)) = range.start() else {
        return sheet;
    };

    for _ in 0..first_row {
        sheet.push_row(Vec::new());
    }

    for row in range.rows() {
        let mut cells = vec![Cell::Empty; first_col as usize];
        cells.extend(row.iter().map(cell_from_data));
        sheet.push_row(cells);
    }

    sheet
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
    }
}
