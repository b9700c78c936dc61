//! Keyword-based task classification.
//!
//! The Spanish keyword sets are checked first, in a fixed order, and the
//! first set with any substring hit decides the category. The English sets
//! are only consulted when no Spanish set matched, so an English stem such
//! as `program` never overrides a Spanish hit. Matching is case-insensitive.

use crate::category::TaskCategory;
use conductor_telemetry::estimate_tokens;
use serde::{Deserialize, Serialize};

type KeywordSet = (TaskCategory, &'static [&'static str]);

const SPANISH_SETS: [KeywordSet; 4] = [
    (
        TaskCategory::Coding,
        &["código", "programar", "desarrollar", "debug", "refactorizar", "api", "función"],
    ),
    (
        TaskCategory::DataAnalysis,
        &["análisis", "datos", "csv", "json", "base de datos", "consulta", "reporte"],
    ),
    (
        TaskCategory::WebAutomation,
        &["web scraping", "extraer", "web", "sitio", "navegador", "automatización"],
    ),
    (
        TaskCategory::Creative,
        &["escribir", "crear contenido", "artículo", "blog", "marketing", "diseño"],
    ),
];

const ENGLISH_SETS: [KeywordSet; 4] = [
    (
        TaskCategory::Coding,
        &["code", "program", "develop", "refactor", "function", "bug"],
    ),
    (
        TaskCategory::DataAnalysis,
        &["analysis", "data", "query", "report", "spreadsheet"],
    ),
    (
        TaskCategory::WebAutomation,
        &["scrape", "extract", "website", "browser", "automation"],
    ),
    (TaskCategory::Creative, &["write", "article", "content", "design"]),
];

fn first_match(sets: &[KeywordSet], lower: &str) -> Option<TaskCategory> {
    sets.iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
}

/// Full classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_category: TaskCategory,
    pub confidence: f64,
    pub suggested_llm: String,
    pub estimated_tokens: usize,
}

/// Category of a free-text task description
pub fn classify(description: &str) -> TaskCategory {
    let lower = description.to_lowercase();
    first_match(&SPANISH_SETS, &lower)
        .or_else(|| first_match(&ENGLISH_SETS, &lower))
        .unwrap_or(TaskCategory::General)
}

/// Category plus confidence, suggested model and token estimate
pub fn classify_detailed(description: &str) -> Classification {
    let category = classify(description);
    tracing::debug!(category = %category, "classified task");

    Classification {
        primary_category: category,
        confidence: category.confidence(),
        suggested_llm: category.suggested_llm().to_string(),
        estimated_tokens: estimate_tokens(description),
    }
}
