//! Routing event record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the routing log, written after every model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingEvent {
    pub timestamp: DateTime<Utc>,
    pub task_type: String,
    pub model_key: String,
    pub model_name: String,
    pub provider: String,
    pub score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub privacy_required: bool,
    #[serde(default)]
    pub candidates: usize,
}
