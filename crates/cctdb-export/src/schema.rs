//! Database schema definitions (DDL) and validation of schema overrides.

use sqlparser::ast::{ObjectName, Statement};
use sqlparser::dialect::SQLiteDialect;
use sqlparser::keywords::Keyword;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::{Token, Tokenizer};

use crate::error::SchemaError;

/// A table populated by the generated script, with its columns in insert order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const TEST_STEPS: TableSpec = TableSpec {
    name: "TestSteps",
    columns: &["Id", "Description", "Class", "Method", "NumParameters"],
};

pub const TEST_STEP_PARAMETERS: TableSpec = TableSpec {
    name: "TestStepParameters",
    columns: &["Id", "TestStepId", "TestId", "Value", "ParamOrder"],
};

pub const TEST_CASES: TableSpec = TableSpec {
    name: "TestCases",
    columns: &[
        "Id",
        "TestGroup",
        "TestCaseIdentifier",
        "TestCaseDescription",
        "Status",
        "ExpectedStatus",
        "Enabled",
    ],
};

/// `TestCases` in schemas that carry the container tag in its own column.
pub const TEST_CASES_WITH_CONTAINER: TableSpec = TableSpec {
    name: "TestCases",
    columns: &[
        "Id",
        "TestGroup",
        "TestCaseIdentifier",
        "TestCaseDescription",
        "Status",
        "ExpectedStatus",
        "Enabled",
        "TestCaseContainer",
    ],
};

/// Optional `TestCases` column that receives the container tag when declared.
const CASE_CONTAINER_COLUMN: &str = "TestCaseContainer";

pub const TESTS_TO_STEPS: TableSpec = TableSpec {
    name: "TestsToSteps",
    columns: &["Id", "TestStepId", "TestId", "ExecutionOrder", "Status"],
};

/// Tables that receive rows, in emission order.
pub const POPULATED_TABLES: [TableSpec; 4] =
    [TEST_STEPS, TEST_STEP_PARAMETERS, TEST_CASES, TESTS_TO_STEPS];

/// Built-in schema used when no override is supplied.
///
/// `TestGroups` and `GroupsToTestCases` are created but never populated.
pub const DEFAULT_SCHEMA: &str = r#"CREATE TABLE "TestSteps" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "Description" TEXT,
    "Class" TEXT,
    "Method" TEXT,
    "NumParameters" INTEGER
);
CREATE TABLE "TestsToSteps" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "TestStepId" INTEGER,
    "TestId" INTEGER,
    "ExecutionOrder" INTEGER,
    "Status" INTEGER
);
CREATE TABLE "TestStepParameters" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "TestStepId" INTEGER,
    "TestId" INTEGER,
    "Value" TEXT,
    "ParamOrder" TEXT
);
CREATE TABLE "TestCases" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "TestGroup" TEXT,
    "TestCaseIdentifier" TEXT,
    "TestCaseDescription" TEXT,
    "Status" INTEGER,
    "ExpectedStatus" INTEGER,
    "Enabled" INTEGER
);
CREATE TABLE "TestGroups" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "GroupDescription" TEXT
);
CREATE TABLE "GroupsToTestCases" (
    "Id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "TestGroupId" INTEGER,
    "TestCaseId" INTEGER
);
"#;

/// Schema text that has been checked to create every populated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    text: String,
    case_container: bool,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            text: DEFAULT_SCHEMA.to_string(),
            case_container: false,
        }
    }
}

impl Schema {
    /// Parses schema text with the SQLite dialect and checks that every
    /// populated table exists with the columns the inserts name.
    ///
    /// Extra tables and columns are allowed. Names compare case-insensitively,
    /// as SQLite does. Statements other than `CREATE` that the parser does not
    /// understand (such as `PRAGMA foreign_keys=OFF;` in a `.dump` header) are
    /// kept in the text unchecked.
    pub fn parse(text: impl Into<String>) -> Result<Self, SchemaError> {
        let text = text.into();
        let tables = created_tables(&text)?;

        for spec in POPULATED_TABLES {
            let (_, columns) = tables
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(spec.name))
                .ok_or(SchemaError::MissingTable(spec.name))?;

            if let Some(column) = spec
                .columns
                .iter()
                .find(|required| !has_column(columns, required))
            {
                return Err(SchemaError::MissingColumn {
                    table: spec.name,
                    column: *column,
                });
            }
        }

        let case_container = tables
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(TEST_CASES.name))
            .is_some_and(|(_, columns)| has_column(columns, CASE_CONTAINER_COLUMN));

        Ok(Self {
            text,
            case_container,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `TestCases` declares a `TestCaseContainer` column.
    pub fn has_case_container(&self) -> bool {
        self.case_container
    }

    /// Column layout for `TestCases` inserts against this schema.
    pub fn test_cases_table(&self) -> &'static TableSpec {
        if self.case_container {
            &TEST_CASES_WITH_CONTAINER
        } else {
            &TEST_CASES
        }
    }
}

fn has_column(columns: &[String], name: &str) -> bool {
    columns.iter().any(|c| c.eq_ignore_ascii_case(name))
}

/// Tables created by `text`, with their column names.
///
/// The text is tokenized once and parsed one statement at a time. A `CREATE`
/// statement that fails to parse is an error; other unparseable statements
/// are skipped. Text with no parseable `CREATE TABLE` at all reports the first
/// parse failure.
fn created_tables(text: &str) -> Result<Vec<(String, Vec<String>)>, SchemaError> {
    let dialect = SQLiteDialect {};
    let tokens = Tokenizer::new(&dialect, text).tokenize()?;

    let mut tables = Vec::new();
    let mut first_error = None;

    for chunk in tokens.split(|token| *token == Token::SemiColon) {
        let leading = chunk.iter().find(|t| !matches!(t, Token::Whitespace(_)));
        let Some(leading) = leading else {
            continue;
        };

        match Parser::new(&dialect).with_tokens(chunk.to_vec()).parse_statement() {
            Ok(Statement::CreateTable(create)) => tables.push((
                simple_name(&create.name),
                create.columns.iter().map(|c| c.name.value.clone()).collect(),
            )),
            Ok(_) => {}
            Err(e) if is_keyword(leading, Keyword::CREATE) => return Err(e.into()),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) if tables.is_empty() => Err(e.into()),
        _ => Ok(tables),
    }
}

fn is_keyword(token: &Token, keyword: Keyword) -> bool {
    matches!(token, Token::Word(word) if word.keyword == keyword)
}

/// Unqualified table name from an object name (`main.TestSteps` → `TestSteps`).
fn simple_name(name: &ObjectName) -> String {
    name.0
        .last()
        .map(|part| {
            part.as_ident()
                .map(|ident| ident.value.clone())
                .unwrap_or_else(|| part.to_string())
        })
        .unwrap_or_default()
}
