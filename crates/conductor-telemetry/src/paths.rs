//! Path resolution for conductor state files

use crate::TelemetryError;
use std::path::PathBuf;

/// Resolves standard locations under `~/.conductor`
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve paths relative to the user's home directory
    pub fn new() -> Result<Self, TelemetryError> {
        let home = dirs::home_dir().ok_or(TelemetryError::HomeNotFound)?;
        Ok(Self::with_root(home.join(".conductor")))
    }

    /// Resolve paths under an explicit root (used by tests and embedders)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// User configuration (catalog and weight overrides)
    pub fn config_file(&self) -> PathBuf {
        self.root.join("conductor.json")
    }

    /// Persisted selection history snapshot
    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.json")
    }

    pub fn telemetry_dir(&self) -> PathBuf {
        self.root.join("telemetry")
    }

    /// Append-only log of every routing decision
    pub fn routing_log(&self) -> PathBuf {
        self.telemetry_dir().join("routing.jsonl")
    }
}
