//! Script output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExportError;

/// Writes `script` to `path` through a temporary file in the same directory.
///
/// The destination is replaced only after every byte has been written and
/// flushed; on failure it is left untouched and the temporary file removed.
pub fn write_script_atomically(path: &Path, script: &str) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(script.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| ExportError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("populate.sql");

        write_script_atomically(&path, "first;\n").unwrap();
        write_script_atomically(&path, "second;\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second;\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("populate.sql");

        let err = write_script_atomically(&path, "x;\n").unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(!dir.path().join("absent").exists());
    }
}
