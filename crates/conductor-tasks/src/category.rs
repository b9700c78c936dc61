//! Task categories produced by the classifier

use crate::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Coding,
    DataAnalysis,
    WebAutomation,
    Creative,
    General,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Coding,
        TaskCategory::DataAnalysis,
        TaskCategory::WebAutomation,
        TaskCategory::Creative,
        TaskCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskCategory::Coding => "coding",
            TaskCategory::DataAnalysis => "data_analysis",
            TaskCategory::WebAutomation => "web_automation",
            TaskCategory::Creative => "creative",
            TaskCategory::General => "general",
        }
    }

    /// Fixed classification confidence for a keyword hit in this category
    pub fn confidence(self) -> f64 {
        match self {
            TaskCategory::Coding => 0.8,
            TaskCategory::DataAnalysis => 0.7,
            TaskCategory::WebAutomation => 0.75,
            TaskCategory::Creative => 0.65,
            TaskCategory::General => 0.5,
        }
    }

    pub fn suggested_llm(self) -> &'static str {
        match self {
            TaskCategory::Coding | TaskCategory::General => "claude-3-5-sonnet",
            TaskCategory::DataAnalysis => "claude-3-haiku",
            TaskCategory::WebAutomation | TaskCategory::Creative => "gpt-4-turbo",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        TaskCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| TaskError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_names() {
        for category in TaskCategory::ALL {
            assert_eq!(category.as_str().parse::<TaskCategory>(), Ok(category));
        }
        assert_eq!(
            "data-analysis".parse::<TaskCategory>(),
            Ok(TaskCategory::DataAnalysis)
        );
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            "gardening".parse::<TaskCategory>(),
            Err(TaskError::UnknownCategory("gardening".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TaskCategory::WebAutomation).unwrap();
        assert_eq!(json, "\"web_automation\"");
    }
}
