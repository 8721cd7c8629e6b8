//! Conversion pipeline: layout → catalog → cases → keys.

#[cfg(feature = "tracing")]
use tracing::info;

use crate::cases::assemble_cases;
use crate::catalog::build_catalog;
use crate::error::ConvertError;
use crate::keys::assign_keys;
use crate::types::{Conversion, ConvertOptions, IssueCount, Summary, Workbook};

/// Converts a workbook into surrogate-keyed relational rows.
///
/// The run is all-or-nothing: any [`ConvertError`] means no dataset at all.
/// Non-fatal findings are returned in [`Conversion::issues`].
pub fn convert(workbook: &Workbook, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let layout = options.layout.resolve(workbook)?;
    let mut issues = Vec::new();

    let catalog = build_catalog(&layout.categories, options.on_duplicate, &mut issues)?;
    let cases = assemble_cases(layout.overview, &catalog, &mut issues)?;
    let dataset = assign_keys(&catalog, &cases)?;

    let summary = Summary {
        category_sheet_count: layout.categories.len(),
        step_count: dataset.steps.len(),
        parameter_count: dataset.parameters.len(),
        case_count: dataset.cases.len(),
        link_count: dataset.links.len(),
        issue_count: IssueCount::from_issues(&issues),
    };

    #[cfg(feature = "tracing")]
    info!(
        overview = layout.overview.name(),
        steps = summary.step_count,
        cases = summary.case_count,
        links = summary.link_count,
        "converted workbook"
    );

    Ok(Conversion {
        dataset,
        issues,
        summary,
    })
}
