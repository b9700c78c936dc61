//! Category-indexed subtask templates

use crate::category::TaskCategory;
use serde::{Deserialize, Serialize};

/// Kind of work a subtask represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskKind {
    Analysis,
    Preparation,
    Coding,
    Testing,
    DataProcessing,
    Reporting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: SubtaskKind,
    /// Ids of subtasks that must finish first
    pub dependencies: Vec<u32>,
    /// Estimated duration in seconds
    pub estimated_duration: u64,
    pub required_capabilities: Vec<String>,
}

/// Template row: (title, description, kind, seconds, capabilities)
type Step = (&'static str, &'static str, SubtaskKind, u64, &'static [&'static str]);

const BASE_STEPS: &[Step] = &[
    (
        "Analysis and planning",
        "Analyze the requirements and draft a detailed plan",
        SubtaskKind::Analysis,
        300,
        &["analysis"],
    ),
    (
        "Resource preparation",
        "Prepare the tools, data and resources needed",
        SubtaskKind::Preparation,
        180,
        &["resource_management"],
    ),
];

const CODING_STEPS: &[Step] = &[
    (
        "Code implementation",
        "Write and implement the requested code",
        SubtaskKind::Coding,
        900,
        &["coding", "llm_integration"],
    ),
    (
        "Testing and validation",
        "Test and validate the implementation",
        SubtaskKind::Testing,
        300,
        &["testing", "debugging"],
    ),
];

const DATA_STEPS: &[Step] = &[
    (
        "Data processing",
        "Process and clean the data",
        SubtaskKind::DataProcessing,
        600,
        &["data_analysis", "python"],
    ),
    (
        "Report generation",
        "Build visualizations and reports",
        SubtaskKind::Reporting,
        400,
        &["visualization", "reporting"],
    ),
];

fn category_steps(category: TaskCategory) -> &'static [Step] {
    match category {
        TaskCategory::Coding => CODING_STEPS,
        TaskCategory::DataAnalysis => DATA_STEPS,
        TaskCategory::WebAutomation | TaskCategory::Creative | TaskCategory::General => &[],
    }
}

/// Canned subtask list for `category`.
///
/// Ids start at 1 and each subtask depends only on its predecessor.
pub fn decompose(category: TaskCategory) -> Vec<Subtask> {
    BASE_STEPS
        .iter()
        .chain(category_steps(category))
        .zip(1u32..)
        .map(|(&(title, description, kind, seconds, caps), id)| Subtask {
            id,
            title: title.to_string(),
            description: description.to_string(),
            kind,
            dependencies: if id > 1 { vec![id - 1] } else { Vec::new() },
            estimated_duration: seconds,
            required_capabilities: caps.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}

/// [`decompose`] by category name; unknown names use the general template
pub fn decompose_named(name: &str) -> Vec<Subtask> {
    let category = name.parse::<TaskCategory>().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to general template");
        TaskCategory::General
    });
    decompose(category)
}
