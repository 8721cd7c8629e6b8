//! Step catalog: every step defined across the category sheets, keyed by identifier.

use indexmap::map::Entry;
use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::error::ConvertError;
use crate::split::split_list;
use crate::types::{
    cell_text, issue_codes, Cell, DuplicateStepPolicy, Issue, Sheet, SourceRow, TestStep,
};

/// Column positions on a category sheet.
mod columns {
    pub const ID: usize = 0;
    pub const CLASS: usize = 1;
    pub const METHOD: usize = 2;
    pub const DESCRIPTION: usize = 3;
    pub const PARAMETERS: usize = 4;
}

/// Steps keyed by natural identifier, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct StepCatalog {
    steps: IndexMap<String, TestStep>,
}

impl StepCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TestStep> {
        self.steps.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.contains_key(id)
    }

    /// Steps in catalog order. A step replaced under [`DuplicateStepPolicy::LastWins`]
    /// keeps the position of its first definition.
    pub fn iter(&self) -> impl Iterator<Item = &TestStep> {
        self.steps.values()
    }

    /// Adds a step, resolving identifier collisions with `policy`.
    pub fn insert(
        &mut self,
        step: TestStep,
        policy: DuplicateStepPolicy,
        issues: &mut Vec<Issue>,
    ) -> Result<(), ConvertError> {
        match self.steps.entry(step.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(step);
                Ok(())
            }
            Entry::Occupied(mut slot) => {
                let first = slot.get().location.clone();
                let second = step.location.clone();
                let id = step.id.clone();

                let message = match policy {
                    DuplicateStepPolicy::Reject => {
                        return Err(ConvertError::DuplicateStep { id, first, second });
                    }
                    DuplicateStepPolicy::LastWins => {
                        slot.insert(step);
                        format!("step '{id}' redefined; {second} replaces {first}")
                    }
                    DuplicateStepPolicy::FirstWins => {
                        format!("step '{id}' redefined; {second} ignored in favour of {first}")
                    }
                };

                #[cfg(feature = "tracing")]
                warn!(step = %id, "{message}");

                issues.push(Issue::warning(issue_codes::DUPLICATE_STEP, message).with_location(second));
                Ok(())
            }
        }
    }
}

/// Reads one step from a category sheet row. Returns `None` for rows without an identifier.
fn read_step(sheet: &Sheet, row_number: usize, row: &[Cell]) -> Option<TestStep> {
    let id = cell_text(row, columns::ID);
    if id.is_empty() {
        return None;
    }

    Some(TestStep {
        id,
        class_name: cell_text(row, columns::CLASS),
        method: cell_text(row, columns::METHOD),
        description: cell_text(row, columns::DESCRIPTION),
        parameters: split_list(&cell_text(row, columns::PARAMETERS)),
        location: SourceRow::new(sheet.name(), row_number),
    })
}

/// Builds the step catalog from category sheets, scanned in the given order.
///
/// Row 0 of every sheet is a header. Rows with an empty identifier cell are
/// skipped and reported as info issues when they carry any other content.
pub fn build_catalog(
    sheets: &[&Sheet],
    policy: DuplicateStepPolicy,
    issues: &mut Vec<Issue>,
) -> Result<StepCatalog, ConvertError> {
    let mut catalog = StepCatalog::new();

    for sheet in sheets {
        #[cfg(feature = "tracing")]
        let before = catalog.len();

        for (row_number, row) in sheet.data_rows() {
            match read_step(sheet, row_number, row) {
                Some(step) => catalog.insert(step, policy, issues)?,
                None => {
                    if row.iter().any(|cell| !cell.is_empty()) {
                        issues.push(
                            Issue::info(
                                issue_codes::BLANK_STEP_ROW,
                                "row has content but no step identifier; skipped",
                            )
                            .with_location(SourceRow::new(sheet.name(), row_number)),
                        );
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        debug!(
            sheet = sheet.name(),
            added = catalog.len() - before,
            "scanned category sheet"
        );
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_row(id: &str, class: &str, method: &str, desc: &str, params: &str) -> Vec<Cell> {
        vec![
            Cell::from(id),
            Cell::from(class),
            Cell::from(method),
            Cell::from(desc),
            Cell::from(params),
        ]
    }

    fn category(name: &str, rows: Vec<Vec<Cell>>) -> Sheet {
        let mut all = vec![step_row("Id", "Class", "Method", "Description", "Parameters")];
        all.extend(rows);
        Sheet::with_rows(name, all)
    }

    #[test]
    fn builds_step_with_trimmed_fields_and_parameters() {
        let sheet = category(
            "BER-TLV",
            vec![step_row(" S1 ", "Decoder ", " parseTag", "Parse a tag", "0x5F,0x7F")],
        );
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut issues).unwrap();

        let step = catalog.get("S1").expect("S1 in catalog");
        assert_eq!(step.class_name, "Decoder");
        assert_eq!(step.method, "parseTag");
        assert_eq!(step.description, "Parse a tag");
        assert_eq!(step.parameters, vec!["0x5F", "0x7F"]);
        assert_eq!(step.location, SourceRow::new("BER-TLV", 2));
        assert!(issues.is_empty());
    }

    #[test]
    fn empty_parameter_cell_yields_no_parameters() {
        let sheet = category(
            "CMS",
            vec![vec![Cell::from("S2"), Cell::from("Cms"), Cell::from("verify")]],
        );
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut issues).unwrap();
        assert!(catalog.get("S2").unwrap().parameters.is_empty());
    }

    #[test]
    fn numeric_identifiers_are_stringified_without_fraction() {
        let sheet = category(
            "PKIX",
            vec![vec![Cell::Number(12.0), Cell::from("Pkix"), Cell::from("run")]],
        );
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut issues).unwrap();
        assert!(catalog.contains("12"));
    }

    #[test]
    fn header_row_is_never_a_step() {
        let sheet = category("CMS", vec![]);
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut issues).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn blank_rows_are_skipped_and_reported_only_with_content() {
        let sheet = category(
            "CMS",
            vec![
                step_row("", "", "", "", ""),
                step_row("", "Orphan", "method", "", ""),
                step_row("S3", "Cms", "run", "", ""),
            ],
        );
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut issues).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, issue_codes::BLANK_STEP_ROW);
        assert_eq!(issues[0].location, Some(SourceRow::new("CMS", 3)));
    }

    fn duplicated() -> (Sheet, Sheet) {
        (
            category(
                "BER-TLV",
                vec![
                    step_row("S1", "First", "one", "", "a"),
                    step_row("S2", "Other", "two", "", ""),
                ],
            ),
            category("CMS", vec![step_row("S1", "Second", "one", "", "b,c")]),
        )
    }

    #[test]
    fn duplicate_identifier_is_rejected_by_default() {
        let (a, b) = duplicated();
        let mut issues = Vec::new();
        let err = build_catalog(&[&a, &b], DuplicateStepPolicy::default(), &mut issues).unwrap_err();
        assert_eq!(
            err,
            ConvertError::DuplicateStep {
                id: "S1".to_string(),
                first: SourceRow::new("BER-TLV", 2),
                second: SourceRow::new("CMS", 2),
            }
        );
    }

    #[test]
    fn last_wins_replaces_in_place_and_warns() {
        let (a, b) = duplicated();
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&a, &b], DuplicateStepPolicy::LastWins, &mut issues).unwrap();

        let order: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["S1", "S2"]);
        assert_eq!(catalog.get("S1").unwrap().class_name, "Second");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, issue_codes::DUPLICATE_STEP);
    }

    #[test]
    fn first_wins_keeps_original_and_warns() {
        let (a, b) = duplicated();
        let mut issues = Vec::new();
        let catalog = build_catalog(&[&a, &b], DuplicateStepPolicy::FirstWins, &mut issues).unwrap();

        assert_eq!(catalog.get("S1").unwrap().class_name, "First");
        assert_eq!(catalog.get("S1").unwrap().parameters, vec!["a"]);
        assert_eq!(issues.len(), 1);
    }
}
