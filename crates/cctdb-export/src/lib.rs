//! SQL script generation for keyed conformance test datasets.
//!
//! Turns a [`KeyedDataset`](cctdb_core::KeyedDataset) into one script: the
//! schema DDL followed by an `INSERT` per row. Schema overrides are parsed
//! with `sqlparser`'s SQLite dialect and checked for every populated table
//! and column before any script is produced.

mod error;
mod literal;
mod schema;
mod script;
mod writer;

pub use error::{ExportError, LiteralError, SchemaError};
pub use literal::{quote_ident, quote_text, SqlValue};
pub use schema::{Schema, TableSpec, DEFAULT_SCHEMA, POPULATED_TABLES};
pub use script::{export_sql, ScriptOptions};
pub use writer::write_script_atomically;
