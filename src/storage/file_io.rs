//! File I/O utilities with atomic writes
//!
//! JSON files are written to a temp file in the same directory and renamed
//! into place, so a crash mid-write never leaves a half-written snapshot.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{HorizonError, HorizonResult};

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> HorizonResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no snapshot on disk, starting empty");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| HorizonError::Storage(format!("Cannot open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| HorizonError::Storage(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> HorizonResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            HorizonError::Storage(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path).map_err(|e| {
            HorizonError::Storage(format!("Cannot create {}: {}", temp_path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| HorizonError::Storage(format!("Cannot serialize: {}", e)))?;
        writer
            .flush()
            .map_err(|e| HorizonError::Storage(format!("Cannot flush: {}", e)))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        HorizonError::Storage(format!("Cannot move into place {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Sample {
        name: String,
        value: i64,
    }

    #[test]
    fn test_read_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let sample: Sample = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.json");

        let sample = Sample {
            name: "rent".into(),
            value: 150000,
        };
        write_json_atomic(&path, &sample).unwrap();

        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(loaded, sample);

        // No temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deep").join("s.json");

        write_json_atomic(&path, &Sample::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        std::fs::write(&path, "{not json").unwrap();

        let result: HorizonResult<Sample> = read_json(&path);
        assert!(matches!(result, Err(HorizonError::Storage(_))));
    }
}
