//! Surrogate key assignment for the four relational id-spaces.

use std::collections::HashMap;

use crate::catalog::StepCatalog;
use crate::error::ConvertError;
use crate::types::{CaseRow, KeyedDataset, LinkRow, ParameterRow, RowId, StepRow, TestCase};

/// Contiguous id sequence starting at 1.
#[derive(Debug, Default)]
struct IdSequence {
    last: RowId,
}

impl IdSequence {
    fn next_id(&mut self) -> RowId {
        self.last += 1;
        self.last
    }
}

/// Assigns surrogate ids to steps, parameters, cases and case-step links.
///
/// Steps and their parameters are numbered in catalog order within a single
/// pass, so parameter ids follow their owning step. Cases and links follow
/// `cases` order. Every id-space starts at 1 and has no gaps.
pub fn assign_keys(catalog: &StepCatalog, cases: &[TestCase]) -> Result<KeyedDataset, ConvertError> {
    let mut step_ids = IdSequence::default();
    let mut parameter_ids = IdSequence::default();
    let mut case_ids = IdSequence::default();
    let mut link_ids = IdSequence::default();

    let mut dataset = KeyedDataset::default();
    let mut by_identifier: HashMap<&str, RowId> = HashMap::with_capacity(catalog.len());

    for step in catalog.iter() {
        let step_id = step_ids.next_id();
        by_identifier.insert(step.id.as_str(), step_id);

        dataset.steps.push(StepRow {
            id: step_id,
            identifier: step.id.clone(),
            class_name: step.class_name.clone(),
            method: step.method.clone(),
            description: step.description.clone(),
            parameter_count: step.parameters.len(),
        });

        dataset
            .parameters
            .extend(step.parameters.iter().enumerate().map(|(order, value)| ParameterRow {
                id: parameter_ids.next_id(),
                step_id,
                value: value.clone(),
                order,
            }));
    }

    for case in cases {
        let case_id = case_ids.next_id();

        dataset.cases.push(CaseRow {
            id: case_id,
            identifier: case.id.clone(),
            description: case.description.clone(),
            container: (!case.container.is_empty()).then(|| case.container.clone()),
        });

        for (order, reference) in case.steps.iter().enumerate() {
            let step_id = *by_identifier.get(reference.as_str()).ok_or_else(|| {
                ConvertError::UnknownStepReference {
                    case: case.id.clone(),
                    reference: reference.clone(),
                    location: case.location.clone(),
                }
            })?;

            dataset.links.push(LinkRow {
                id: link_ids.next_id(),
                case_id,
                step_id,
                order,
            });
        }
    }

    Ok(dataset)
}
