//! Comma-delimited cell splitting shared by parameter and step-reference columns.

/// Splits a comma-delimited cell into trimmed items, preserving order.
///
/// - An empty (or whitespace-only) cell yields no items.
/// - A cell without a comma yields the whole trimmed cell.
/// - Trailing commas never produce empty trailing items, however many there
///   are. Empty items between commas are kept so positions stay aligned with
///   the cell.
pub fn split_list(cell: &str) -> Vec<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Vec::new();
    }

    let mut items: Vec<String> = cell.split(',').map(|s| s.trim().to_string()).collect();
    while items.last().is_some_and(String::is_empty) {
        items.pop();
    }
    items
}
