use conductor_core::{default_catalog, Config, ModelDescriptor, ReasoningThresholds, ScoringWeights};
use conductor_telemetry::{read_json, Paths};
use serde::{Deserialize, Serialize};

/// On-disk shape of `conductor.json`; every field is optional
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoringWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningThresholds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_capacity: Option<usize>,
}

impl SettingsFile {
    /// Fully populated file with the built-in defaults
    pub fn defaults() -> Self {
        let config = Config::new();
        Self {
            models: Some(default_catalog()),
            weights: Some(config.weights),
            reasoning: Some(config.reasoning),
            history_capacity: Some(config.history_capacity),
        }
    }
}

/// Effective settings after applying overrides to defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub models: Vec<ModelDescriptor>,
}

impl Settings {
    pub fn load(paths: &Paths) -> Self {
        let file = match read_json::<SettingsFile>(&paths.config_file()) {
            Ok(Some(file)) => file,
            Ok(None) => SettingsFile::default(),
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable settings, using defaults");
                SettingsFile::default()
            }
        };
        Self::from_file(file)
    }

    pub fn from_file(file: SettingsFile) -> Self {
        let mut config = Config::new();
        if let Some(weights) = file.weights {
            if weights.has_valid_confidence_band() {
                config.weights = weights;
            } else {
                tracing::warn!(
                    floor = weights.confidence_floor,
                    ceiling = weights.confidence_ceiling,
                    "confidence band is inverted, using default weights"
                );
            }
        }
        if let Some(reasoning) = file.reasoning {
            config.reasoning = reasoning;
        }
        if let Some(capacity) = file.history_capacity {
            config.history_capacity = capacity;
        }

        Self {
            config,
            models: file.models.unwrap_or_else(default_catalog),
        }
    }
}
