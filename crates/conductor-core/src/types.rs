//! Core types for model selection

use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named aptitude a model is scored on (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Coding,
    Reasoning,
    Multimodal,
    Privacy,
    Analysis,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Coding => "coding",
            Capability::Reasoning => "reasoning",
            Capability::Multimodal => "multimodal",
            Capability::Privacy => "privacy",
            Capability::Analysis => "analysis",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed latency and reliability of a model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Average response time in seconds
    pub avg_response_time: f64,
    /// Success rate on a 0-100 scale
    pub success_rate: f64,
}

fn default_active() -> bool {
    true
}

/// A provider/model candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub model_key: String,
    #[serde(default)]
    pub capabilities: BTreeMap<Capability, f64>,
    pub performance: PerformanceRecord,
    #[serde(default)]
    pub cost_per_token: f64,
    #[serde(default)]
    pub max_context_length: u64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ModelDescriptor {
    /// Capability score, `None` when the model does not declare it
    pub fn capability(&self, capability: Capability) -> Option<f64> {
        self.capabilities.get(&capability).copied()
    }
}

/// Task type declared on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Coding,
    Reasoning,
    Multimodal,
    Analysis,
    #[default]
    General,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::Coding,
        TaskType::Reasoning,
        TaskType::Multimodal,
        TaskType::Analysis,
        TaskType::General,
    ];

    /// Capability that earns the task-match weight. Analysis and general
    /// requests carry no capability term.
    pub fn scored_capability(self) -> Option<Capability> {
        match self {
            TaskType::Coding => Some(Capability::Coding),
            TaskType::Reasoning => Some(Capability::Reasoning),
            TaskType::Multimodal => Some(Capability::Multimodal),
            TaskType::Analysis | TaskType::General => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Coding => "coding",
            TaskType::Reasoning => "reasoning",
            TaskType::Multimodal => "multimodal",
            TaskType::Analysis => "analysis",
            TaskType::General => "general",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        TaskType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownTaskType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(CoreError::UnknownPriority(s.to_string())),
        }
    }
}

/// A user submission to be routed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub description: String,
    pub task_type: TaskType,
    #[serde(default)]
    pub priority: Priority,
    /// Requested context length in tokens
    pub context_length: u64,
    #[serde(default)]
    pub privacy_required: bool,
    /// Maximum acceptable cost per token
    pub max_cost: f64,
}

impl TaskRequest {
    pub fn new(description: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            description: description.into(),
            task_type,
            ..Self::default()
        }
    }
}

impl Default for TaskRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            task_type: TaskType::General,
            priority: Priority::Medium,
            context_length: 4000,
            privacy_required: false,
            max_cost: 0.1,
        }
    }
}

/// Outcome of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub task_type: TaskType,
    pub selected_model: ModelDescriptor,
    pub reasoning: String,
    /// Display confidence percentage, always within the configured band
    pub confidence: f64,
    /// Raw weighted score of the winner
    pub score: f64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_parse() {
        assert_eq!("Coding".parse::<TaskType>().unwrap(), TaskType::Coding);
        assert_eq!(" general ".parse::<TaskType>().unwrap(), TaskType::General);
        assert_eq!(
            "poetry".parse::<TaskType>(),
            Err(CoreError::UnknownTaskType("poetry".to_string()))
        );
    }

    #[test]
    fn test_scored_capability() {
        assert_eq!(TaskType::Coding.scored_capability(), Some(Capability::Coding));
        assert_eq!(TaskType::Analysis.scored_capability(), None);
        assert_eq!(TaskType::General.scored_capability(), None);
    }

    #[test]
    fn test_request_defaults() {
        let request = TaskRequest::new("summarize", TaskType::Reasoning);
        assert_eq!(request.priority, Priority::Medium);
        assert_eq!(request.context_length, 4000);
        assert!(!request.privacy_required);
        assert_eq!(request.max_cost, 0.1);
    }

    #[test]
    fn test_descriptor_capability_keys_serialize_lowercase() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "provider": "Local",
            "model_key": "x-1",
            "capabilities": {"privacy": 100, "coding": 70},
            "performance": {"avg_response_time": 0.5, "success_rate": 90}
        }"#;
        let model: ModelDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(model.capability(Capability::Privacy), Some(100.0));
        assert_eq!(model.capability(Capability::Multimodal), None);
        assert!(model.is_active);
        assert_eq!(model.max_context_length, 0);

        let back = serde_json::to_value(&model).unwrap();
        assert_eq!(back["capabilities"]["coding"], 70.0);
    }
}
