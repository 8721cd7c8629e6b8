//! Error types for the export crate.

use cctdb_core::RowId;
use thiserror::Error;

/// Errors that can occur while generating or writing a script.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Unsafe literal in {table}.{column} (row {row}): {reason}")]
    UnsafeLiteral {
        table: &'static str,
        column: &'static str,
        row: RowId,
        reason: LiteralError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with schema text supplied for the script preamble.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("failed to parse schema SQL: {0}")]
    Parse(String),

    #[error("schema does not create table \"{0}\"")]
    MissingTable(&'static str),

    #[error("schema table \"{table}\" has no column \"{column}\"")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<sqlparser::parser::ParserError> for SchemaError {
    fn from(e: sqlparser::parser::ParserError) -> Self {
        SchemaError::Parse(e.to_string())
    }
}

impl From<sqlparser::tokenizer::TokenizerError> for SchemaError {
    fn from(e: sqlparser::tokenizer::TokenizerError) -> Self {
        SchemaError::Parse(e.to_string())
    }
}

/// A string value that cannot be written as a SQL text literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("contains a NUL character")]
    NulCharacter,
}
