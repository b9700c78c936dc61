use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("no eligible model: candidate list is empty")]
    NoEligibleModel,

    #[error("unknown task type: {0}")]
    UnknownTaskType(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
