#![no_main]

use cctdb_core::{convert, split_list, Cell, ConvertOptions, Sheet, Workbook};
use cctdb_export::{export_sql, ExportError, Schema, ScriptOptions};
use libfuzzer_sys::fuzz_target;

// Form feed separates sheets, newline separates rows, tab separates cells.
fn workbook_from_text(text: &str) -> Workbook {
    let sheets = text
        .split('\x0c')
        .enumerate()
        .map(|(i, body)| {
            let rows = body
                .split('\n')
                .map(|line| line.split('\t').map(Cell::from).collect())
                .collect();
            Sheet::with_rows(format!("Sheet{i}"), rows)
        })
        .collect();
    Workbook::new(sheets)
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for token in split_list(text) {
        assert_eq!(token.trim(), token);
    }

    let workbook = workbook_from_text(text);
    if let Ok(conversion) = convert(&workbook, &ConvertOptions::default()) {
        match export_sql(&conversion.dataset, &Schema::default(), &ScriptOptions::default()) {
            Ok(_) | Err(ExportError::UnsafeLiteral { .. }) => {}
            Err(e) => panic!("unexpected export error: {e}"),
        }
    }
});
