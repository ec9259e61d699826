//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::error::BudgetError;

/// Read a JSON record, returning an error if the file doesn't exist
///
/// Files that cannot be opened fail with `Io`; files that open but do not
/// decode fail with `Deserialization`.
pub fn read_json_required<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to open record");
        BudgetError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to decode record");
        BudgetError::deserialization(path, e.to_string())
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely written or left exactly as it was.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = write_temp_file(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BudgetError::Io(format!("Failed to rename temp file: {}", e)))
    });

    if let Err(e) = &result {
        let _ = fs::remove_file(&temp_path);
        error!(path = %path.display(), error = %e, "failed to write record");
    } else {
        debug!(path = %path.display(), "record written");
    }

    result
}

fn write_temp_file<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), BudgetError> {
    let file = File::create(temp_path)
        .map_err(|e| BudgetError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| BudgetError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: TestData = read_json_required(&path).unwrap();
        assert_eq!(sample(), loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = read_json_required::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_corrupt_file_is_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, r#"{"name": "trunc"#).unwrap();

        let err = read_json_required::<TestData, _>(&path).unwrap_err();
        assert!(err.is_deserialization());
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let updated = TestData {
            name: "updated".into(),
            value: 7,
        };
        write_json_atomic(&path, &updated).unwrap();

        let loaded: TestData = read_json_required(&path).unwrap();
        assert_eq!(loaded, updated);
    }
}
