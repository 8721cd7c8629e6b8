//! Case assembly: overview rows resolved against the step catalog.

use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::catalog::StepCatalog;
use crate::error::ConvertError;
use crate::split::split_list;
use crate::types::{cell_text, issue_codes, Issue, Sheet, SourceRow, TestCase};

/// Column positions on the overview sheet.
///
/// Column 0 (document/group) and column 4 (comments) are not read.
mod columns {
    pub const ID: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const STEPS: usize = 3;
    pub const CONTAINER: usize = 5;
}

/// Reads test cases from the overview sheet in row order.
///
/// Every step reference must name a step in `catalog`; the first one that
/// does not aborts assembly with [`ConvertError::UnknownStepReference`]. A row
/// that lists references without a case identifier is an error too, so no
/// reference is ever dropped unchecked.
pub fn assemble_cases(
    overview: &Sheet,
    catalog: &StepCatalog,
    issues: &mut Vec<Issue>,
) -> Result<Vec<TestCase>, ConvertError> {
    let mut cases = Vec::new();
    let mut seen: HashMap<String, SourceRow> = HashMap::new();

    for (row_number, row) in overview.data_rows() {
        let location = SourceRow::new(overview.name(), row_number);
        let id = cell_text(row, columns::ID);
        let references = cell_text(row, columns::STEPS);

        if id.is_empty() {
            if !references.is_empty() {
                return Err(ConvertError::CaseWithoutIdentifier {
                    references,
                    location,
                });
            }
            if row.iter().any(|cell| !cell.is_empty()) {
                issues.push(
                    Issue::info(
                        issue_codes::BLANK_CASE_ROW,
                        "row has content but no test case identifier; skipped",
                    )
                    .with_location(location),
                );
            }
            continue;
        }

        let steps = split_list(&references);
        for (position, reference) in steps.iter().enumerate() {
            if reference.is_empty() {
                return Err(ConvertError::EmptyStepReference {
                    case: id,
                    position,
                    location,
                });
            }
            if !catalog.contains(reference) {
                return Err(ConvertError::UnknownStepReference {
                    case: id,
                    reference: reference.clone(),
                    location,
                });
            }
        }

        if let Some(first) = seen.get(&id) {
            let message = format!("test case '{id}' also defined at {first}");
            #[cfg(feature = "tracing")]
            warn!(case = %id, "{message}");
            issues.push(
                Issue::warning(issue_codes::DUPLICATE_CASE, message).with_location(location.clone()),
            );
        } else {
            seen.insert(id.clone(), location.clone());
        }

        cases.push(TestCase {
            id,
            description: cell_text(row, columns::DESCRIPTION),
            container: cell_text(row, columns::CONTAINER),
            steps,
            location,
        });
    }

    #[cfg(feature = "tracing")]
    debug!(sheet = overview.name(), cases = cases.len(), "assembled test cases");

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::types::{Cell, DuplicateStepPolicy};
    use rstest::rstest;

    fn catalog(ids: &[&str]) -> StepCatalog {
        let mut rows = vec![vec![Cell::from("Id")]];
        rows.extend(ids.iter().map(|id| vec![Cell::from(*id), Cell::from("Class"), Cell::from("m")]));
        let sheet = Sheet::with_rows("Steps", rows);
        build_catalog(&[&sheet], DuplicateStepPolicy::Reject, &mut Vec::new()).unwrap()
    }

    fn overview(rows: Vec<[&str; 6]>) -> Sheet {
        let mut all = vec![vec![
            Cell::from("Document"),
            Cell::from("Test Id"),
            Cell::from("Test Case Description"),
            Cell::from("Atoms"),
            Cell::from("Comments"),
            Cell::from("Container ID"),
        ]];
        all.extend(
            rows.into_iter()
                .map(|r| r.iter().map(|c| Cell::from(*c)).collect::<Vec<_>>()),
        );
        Sheet::with_rows("Overview", all)
    }

    #[test]
    fn resolves_references_in_order_including_repeats() {
        let sheet = overview(vec![["G", "TC1", "Case one", "S2, S1 ,S2", "", "grp"]]);
        let mut issues = Vec::new();
        let cases = assemble_cases(&sheet, &catalog(&["S1", "S2"]), &mut issues).unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].id, "TC1");
        assert_eq!(cases[0].description, "Case one");
        assert_eq!(cases[0].container, "grp");
        assert_eq!(cases[0].steps, vec!["S2", "S1", "S2"]);
        assert!(issues.is_empty());
    }

    #[test]
    fn trailing_comma_does_not_create_empty_reference() {
        let sheet = overview(vec![["G", "TC1", "", "S1,", "", ""]]);
        let cases = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap();
        assert_eq!(cases[0].steps, vec!["S1"]);
    }

    #[test]
    fn case_without_references_has_no_steps() {
        let sheet = overview(vec![["G", "TC1", "Empty", "", "", ""]]);
        let cases = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap();
        assert!(cases[0].steps.is_empty());
    }

    #[test]
    fn unknown_reference_fails_with_case_and_token() {
        let sheet = overview(vec![
            ["G", "TC1", "", "S1", "", ""],
            ["G", "TC2", "", "S1,S99", "", ""],
        ]);
        let err = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownStepReference {
                case: "TC2".to_string(),
                reference: "S99".to_string(),
                location: SourceRow::new("Overview", 3),
            }
        );
    }

    #[test]
    fn interior_empty_reference_is_rejected_with_position() {
        let sheet = overview(vec![["G", "TC1", "", "S1,,S1", "", ""]]);
        let err = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::EmptyStepReference {
                case: "TC1".to_string(),
                position: 1,
                location: SourceRow::new("Overview", 2),
            }
        );
    }

    #[rstest]
    #[case("S1,,")]
    #[case("S1, ,")]
    #[case("S1,,,")]
    fn repeated_trailing_commas_are_ignored(#[case] refs: &str) {
        let sheet = overview(vec![["G", "TC1", "", refs, "", ""]]);
        let cases = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap();
        assert_eq!(cases[0].steps, vec!["S1"]);
    }

    #[test]
    fn references_without_case_identifier_fail() {
        let sheet = overview(vec![
            ["G", "", "orphan case", "S99", "", "grp"],
            ["G", "TC1", "fine", "S1", "", ""],
        ]);
        let mut issues = Vec::new();
        let err = assemble_cases(&sheet, &catalog(&["S1"]), &mut issues).unwrap_err();

        assert_eq!(
            err,
            ConvertError::CaseWithoutIdentifier {
                references: "S99".to_string(),
                location: SourceRow::new("Overview", 2),
            }
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn known_references_without_case_identifier_also_fail() {
        let sheet = overview(vec![["G", "", "", "S1", "", ""]]);
        let err = assemble_cases(&sheet, &catalog(&["S1"]), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ConvertError::CaseWithoutIdentifier { .. }));
    }

    #[test]
    fn duplicate_case_ids_are_kept_and_warned() {
        let sheet = overview(vec![
            ["G", "TC1", "a", "S1", "", ""],
            ["G", "TC1", "b", "S1", "", ""],
        ]);
        let mut issues = Vec::new();
        let cases = assemble_cases(&sheet, &catalog(&["S1"]), &mut issues).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, issue_codes::DUPLICATE_CASE);
        assert_eq!(issues[0].location, Some(SourceRow::new("Overview", 3)));
    }

    #[test]
    fn rows_without_identifier_are_skipped() {
        let sheet = overview(vec![
            ["", "", "", "", "", ""],
            ["Doc", "", "stray note", "", "", ""],
            ["G", "TC1", "", "S1", "", ""],
        ]);
        let mut issues = Vec::new();
        let cases = assemble_cases(&sheet, &catalog(&["S1"]), &mut issues).unwrap();

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].location.row, 4);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, issue_codes::BLANK_CASE_ROW);
    }
}
