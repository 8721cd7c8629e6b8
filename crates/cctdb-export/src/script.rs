//! Insert script generation.

use std::fmt::Write as _;

use cctdb_core::{KeyedDataset, RowId};

use crate::error::ExportError;
use crate::literal::{quote_ident, SqlValue};
use crate::schema::{Schema, TableSpec, TESTS_TO_STEPS, TEST_STEPS, TEST_STEP_PARAMETERS};

/// Value written to `TestCases.ExpectedStatus` and `TestCases.Enabled`.
const ENABLED: i64 = 1;

/// Options for script generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Prefix the script with a `--` comment naming the generator and row counts.
    pub header: bool,
}

/// Renders the schema followed by one `INSERT` per row.
///
/// Rows are emitted in the order steps, parameters, cases, links, each in
/// dataset order. The container tag goes to `TestCaseContainer` when the
/// schema declares it and to `TestGroup` otherwise. Nothing is returned unless
/// every value renders.
pub fn export_sql(
    dataset: &KeyedDataset,
    schema: &Schema,
    options: &ScriptOptions,
) -> Result<String, ExportError> {
    let mut script = String::new();

    if options.header {
        write_header(&mut script, dataset);
    }

    script.push_str(schema.text());
    if !script.ends_with('\n') {
        script.push('\n');
    }

    for step in &dataset.steps {
        push_insert(
            &mut script,
            &TEST_STEPS,
            step.id,
            &[
                step.id.into(),
                step.identifier.as_str().into(),
                step.class_name.as_str().into(),
                step.method.as_str().into(),
                step.parameter_count.into(),
            ],
        )?;
    }

    for parameter in &dataset.parameters {
        push_insert(
            &mut script,
            &TEST_STEP_PARAMETERS,
            parameter.id,
            &[
                parameter.id.into(),
                parameter.step_id.into(),
                SqlValue::Null,
                parameter.value.as_str().into(),
                parameter.order.into(),
            ],
        )?;
    }

    let cases_table = schema.test_cases_table();
    for case in &dataset.cases {
        let container = SqlValue::optional_text(case.container.as_deref());
        let (group, container) = if schema.has_case_container() {
            (SqlValue::Null, Some(container))
        } else {
            (container, None)
        };

        let mut values = vec![
            case.id.into(),
            group,
            case.identifier.as_str().into(),
            case.description.as_str().into(),
            SqlValue::Null,
            ENABLED.into(),
            ENABLED.into(),
        ];
        values.extend(container);

        push_insert(&mut script, cases_table, case.id, &values)?;
    }

    for link in &dataset.links {
        push_insert(
            &mut script,
            &TESTS_TO_STEPS,
            link.id,
            &[
                link.id.into(),
                link.step_id.into(),
                link.case_id.into(),
                link.order.into(),
                SqlValue::Null,
            ],
        )?;
    }

    Ok(script)
}

fn write_header(script: &mut String, dataset: &KeyedDataset) {
    // Writing to a String cannot fail.
    let _ = writeln!(script, "-- Generated by cctdb {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(
        script,
        "-- {} steps, {} parameters, {} test cases, {} links",
        dataset.steps.len(),
        dataset.parameters.len(),
        dataset.cases.len(),
        dataset.links.len()
    );
}

fn push_insert(
    script: &mut String,
    table: &TableSpec,
    row: RowId,
    values: &[SqlValue<'_>],
) -> Result<(), ExportError> {
    debug_assert_eq!(table.columns.len(), values.len());

    let columns = table
        .columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");

    let literals = table
        .columns
        .iter()
        .zip(values)
        .map(|(column, value)| {
            value.to_literal().map_err(|reason| ExportError::UnsafeLiteral {
                table: table.name,
                column: *column,
                row,
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    // Writing to a String cannot fail.
    let _ = writeln!(
        script,
        "INSERT INTO {} ({columns}) VALUES ({literals});",
        quote_ident(table.name)
    );
    Ok(())
}
