//! Schema loading from DDL files.

use anyhow::{Context, Result};
use cctdb_export::Schema;
use std::path::Path;

/// Load the schema preamble: the file at `path` when given, the built-in schema otherwise.
///
/// Override files are validated before any conversion work starts, so a
/// malformed schema never produces output.
pub fn load_schema(path: Option<&Path>) -> Result<Schema> {
    let Some(path) = path else {
        return Ok(Schema::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    Schema::parse(content).with_context(|| format!("Invalid schema file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cctdb_export::DEFAULT_SCHEMA;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_schema_without_override() {
        assert_eq!(load_schema(None).unwrap(), Schema::default());
    }

    #[test]
    fn loads_override_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        let ddl = format!("-- site schema\n{DEFAULT_SCHEMA}");
        file.write_all(ddl.as_bytes()).unwrap();

        let schema = load_schema(Some(file.path())).unwrap();
        assert_eq!(schema.text(), ddl);
    }

    #[test]
    fn accepts_sqlite_dump_output() {
        let mut file = NamedTempFile::new().unwrap();
        let ddl = format!("PRAGMA foreign_keys=OFF;\nBEGIN TRANSACTION;\n{DEFAULT_SCHEMA}COMMIT;\n");
        file.write_all(ddl.as_bytes()).unwrap();

        let schema = load_schema(Some(file.path())).unwrap();
        assert_eq!(schema.text(), ddl);
    }

    #[test]
    fn malformed_schema_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CREATE TABLE \"TestSteps\" (").unwrap();

        let err = load_schema(Some(file.path())).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid schema file"));
        assert!(message.contains("failed to parse schema SQL"));
    }

    #[test]
    fn schema_missing_tables_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CREATE TABLE \"TestSteps\" (\"Id\" INTEGER);").unwrap();

        let err = load_schema(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("no column"));
    }
}
