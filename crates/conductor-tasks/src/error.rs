use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TaskError {
    #[error("task description is required")]
    EmptyDescription,

    #[error("unknown task category: {0}")]
    UnknownCategory(String),

    #[error("unknown execution mode: {0}")]
    UnknownMode(String),
}
