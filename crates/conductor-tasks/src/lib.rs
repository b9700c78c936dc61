//! Keyword task classification and canned subtask decomposition

mod category;
mod classifier;
mod decomposer;
mod error;
mod plan;

pub use category::TaskCategory;
pub use classifier::{classify, classify_detailed, Classification};
pub use decomposer::{decompose, decompose_named, Subtask, SubtaskKind};
pub use error::TaskError;
pub use plan::{
    complexity_score, execution_plan, plan_task, required_capabilities, total_duration,
    Checkpoint, ExecutionMode, ExecutionPlan, PlanStatus, RollbackStrategy, TaskPlan,
};
