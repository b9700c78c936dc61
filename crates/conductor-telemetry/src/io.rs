//! JSON snapshots and JSONL logs on disk

use crate::TelemetryError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> Result<(), TelemetryError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| TelemetryError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Write bytes via a sibling temp file and rename, so readers never see a
/// partially written file.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), TelemetryError> {
    ensure_parent(path)?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data).map_err(|e| TelemetryError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| TelemetryError::io(path, e))
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), TelemetryError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| TelemetryError::json(path, e))?;
    atomic_write(path, json.as_bytes())
}

/// Read a JSON document, `None` when the file does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, TelemetryError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TelemetryError::io(path, e)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| TelemetryError::json(path, e))
}

/// Append-only JSON-lines log
#[derive(Debug, Clone)]
pub struct JsonlLog {
    path: PathBuf,
}

impl JsonlLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append<T: Serialize>(&self, record: &T) -> Result<(), TelemetryError> {
        ensure_parent(&self.path)?;

        let line = serde_json::to_string(record).map_err(|e| TelemetryError::json(&self.path, e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TelemetryError::io(&self.path, e))?;
        writeln!(file, "{line}").map_err(|e| TelemetryError::io(&self.path, e))
    }

    /// Read every well-formed record; blank and malformed lines are skipped
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, TelemetryError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TelemetryError::io(&self.path, e)),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| TelemetryError::io(&self.path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(record) = serde_json::from_str(&line) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        id: u32,
        label: String,
    }

    #[test]
    fn test_jsonl_skips_malformed_lines() {
        let temp = TempDir::new().unwrap();
        let log = JsonlLog::new(temp.path().join("nested").join("log.jsonl"));

        log.append(&Entry {
            id: 1,
            label: "first".to_string(),
        })
        .unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(log.path())
            .unwrap()
            .write_all(b"not json\n\n")
            .unwrap();
        log.append(&Entry {
            id: 2,
            label: "second".to_string(),
        })
        .unwrap();

        let entries: Vec<Entry> = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].label, "second");
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp = TempDir::new().unwrap();
        let log = JsonlLog::new(temp.path().join("absent.jsonl"));
        let entries: Vec<Entry> = log.read_all().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_json_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.json");

        assert!(read_json::<Entry>(&path).unwrap().is_none());

        let entry = Entry {
            id: 7,
            label: "snap".to_string(),
        };
        write_json_atomic(&path, &entry).unwrap();
        assert_eq!(read_json::<Entry>(&path).unwrap(), Some(entry));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = read_json::<Entry>(&path).unwrap_err();
        assert!(matches!(err, TelemetryError::Json { .. }));
    }
}
