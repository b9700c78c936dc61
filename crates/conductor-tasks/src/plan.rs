//! Execution plan assembled around a decomposition.
//!
//! Parallel groups, critical path and rollback strategy are fixed
//! placeholders; no scheduling happens here.

use crate::classifier::{classify_detailed, Classification};
use crate::decomposer::{decompose, Subtask};
use crate::error::TaskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const MAX_COMPLEXITY: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    StepByStep,
    Continuous,
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::StepByStep => write!(f, "step_by_step"),
            ExecutionMode::Continuous => write!(f, "continuous"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "step_by_step" => Ok(ExecutionMode::StepByStep),
            "continuous" => Ok(ExecutionMode::Continuous),
            "parallel" => Ok(ExecutionMode::Parallel),
            _ => Err(TaskError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub after_task: u32,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollbackStrategy {
    pub strategy: String,
    pub auto_rollback: bool,
    pub manual_intervention_required: bool,
}

impl Default for RollbackStrategy {
    fn default() -> Self {
        Self {
            strategy: "checkpoint_based".to_string(),
            auto_rollback: false,
            manual_intervention_required: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub execution_mode: ExecutionMode,
    pub total_steps: usize,
    /// Groups of subtasks that may run together; never populated
    pub parallel_groups: Vec<Vec<u32>>,
    /// Subtask ids in template order
    pub critical_path: Vec<u32>,
    pub checkpoints: Vec<Checkpoint>,
    pub rollback_strategy: RollbackStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Planned,
}

/// A classified, decomposed task ready to be shown or stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPlan {
    pub task_id: String,
    pub original_task: String,
    pub classification: Classification,
    pub subtasks: Vec<Subtask>,
    pub execution_plan: ExecutionPlan,
    /// Sum of subtask durations in seconds
    pub estimated_duration: u64,
    pub complexity_score: u32,
    pub required_capabilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: PlanStatus,
}

pub fn execution_plan(subtasks: &[Subtask], mode: ExecutionMode) -> ExecutionPlan {
    let checkpoints = subtasks
        .iter()
        .step_by(2)
        .map(|s| Checkpoint {
            after_task: s.id,
            kind: "validation".to_string(),
            description: format!("Checkpoint after {}", s.title),
        })
        .collect();

    ExecutionPlan {
        execution_mode: mode,
        total_steps: subtasks.len(),
        parallel_groups: Vec::new(),
        critical_path: subtasks.iter().map(|s| s.id).collect(),
        checkpoints,
        rollback_strategy: RollbackStrategy::default(),
    }
}

pub fn total_duration(subtasks: &[Subtask]) -> u64 {
    subtasks.iter().map(|s| s.estimated_duration).sum()
}

/// 10 points per subtask plus 5 per dependency edge, capped at 100
pub fn complexity_score(subtasks: &[Subtask]) -> u32 {
    let edges: usize = subtasks.iter().map(|s| s.dependencies.len()).sum();
    let raw = subtasks.len() * 10 + edges * 5;
    u32::try_from(raw).map_or(MAX_COMPLEXITY, |score| score.min(MAX_COMPLEXITY))
}

/// Union of required capabilities in first-seen order
pub fn required_capabilities(subtasks: &[Subtask]) -> Vec<String> {
    let mut seen = HashSet::new();
    subtasks
        .iter()
        .flat_map(|s| s.required_capabilities.iter())
        .filter(|cap| seen.insert(*cap))
        .cloned()
        .collect()
}

fn generate_task_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("task_{}_{}", now.timestamp_millis(), &suffix[..9])
}

/// Classify, decompose and wrap a task description into a plan
pub fn plan_task(description: &str, mode: ExecutionMode) -> Result<TaskPlan, TaskError> {
    if description.trim().is_empty() {
        return Err(TaskError::EmptyDescription);
    }

    let classification = classify_detailed(description);
    let subtasks = decompose(classification.primary_category);
    let now = Utc::now();
    let task_id = generate_task_id(now);

    tracing::info!(
        task_id = %task_id,
        category = %classification.primary_category,
        subtasks = subtasks.len(),
        "task decomposed"
    );

    Ok(TaskPlan {
        task_id,
        original_task: description.to_string(),
        execution_plan: execution_plan(&subtasks, mode),
        estimated_duration: total_duration(&subtasks),
        complexity_score: complexity_score(&subtasks),
        required_capabilities: required_capabilities(&subtasks),
        classification,
        subtasks,
        created_at: now,
        status: PlanStatus::Planned,
    })
}
