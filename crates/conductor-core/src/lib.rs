//! Capability scoring, model catalog and selection history

mod catalog;
mod config;
mod error;
mod history;
mod presets;
mod scorer;
mod types;

pub use catalog::{active_models, default_catalog, find_model};
pub use config::{Config, ReasoningThresholds, ScoringWeights};
pub use error::CoreError;
pub use history::{SelectionHistory, DEFAULT_HISTORY_CAPACITY};
pub use presets::{quick_route, Alternative, EstimatedMetrics, PresetRoute};
pub use scorer::{CapabilityScorer, RankedModel, ScoreBreakdown};
pub use types::{
    Capability, ModelDescriptor, PerformanceRecord, Priority, SelectionRecord, TaskRequest,
    TaskType,
};
