//! Static keyword router: fixed provider/model per task-type keyword

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::Serialize;

const DEFAULT_COST_PER_1K: f64 = 1.0;
const DEFAULT_LATENCY_MS: u32 = 1000;
const DEFAULT_QUALITY: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatedMetrics {
    pub cost_per_1k_tokens: f64,
    pub avg_latency_ms: u32,
    pub quality_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub provider: &'static str,
    pub model: &'static str,
    pub reason: &'static str,
}

/// Outcome of [`quick_route`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetRoute {
    pub task_type: String,
    pub selected_provider: &'static str,
    pub selected_model: &'static str,
    pub reasoning: &'static str,
    pub estimated_metrics: EstimatedMetrics,
    pub alternatives: Vec<Alternative>,
    pub timestamp: DateTime<Utc>,
}

struct Preset {
    provider: &'static str,
    model: &'static str,
    reasoning: &'static str,
}

fn preset_for(task_type: &str) -> Preset {
    let (provider, model, reasoning) = match task_type {
        "code" | "programming" | "debug" | "refactor" => (
            "anthropic",
            "claude-3-5-sonnet-20241022",
            "Claude 3.5 Sonnet is strongest at code generation and analysis",
        ),
        "multimodal" | "vision" | "image_analysis" | "chart_analysis" => (
            "google",
            "gemini-1.5-pro",
            "Gemini 1.5 Pro handles advanced multimodal and vision workloads",
        ),
        "creative" | "writing" | "storytelling" | "marketing" => (
            "openai",
            "gpt-4-turbo-preview",
            "GPT-4 Turbo excels at creative and writing tasks",
        ),
        "analysis" | "research" | "summarization" | "extraction" => (
            "anthropic",
            "claude-3-haiku-20240307",
            "Claude Haiku is efficient and precise for analysis and research",
        ),
        "translation" | "language" => (
            "openai",
            "gpt-4",
            "GPT-4 has broad multilingual support",
        ),
        "local" | "private" | "offline" => (
            "local",
            "llama-3.1-8b-instruct",
            "Local model keeps data private and works offline",
        ),
        _ => (
            "anthropic",
            "claude-3-5-sonnet-20241022",
            "Claude 3.5 Sonnet is a versatile default for general tasks",
        ),
    };
    Preset {
        provider,
        model,
        reasoning,
    }
}

fn cost_per_1k(provider: &str, model: &str) -> f64 {
    match (provider, model) {
        ("anthropic", "claude-3-5-sonnet-20241022") => 3.0,
        ("anthropic", "claude-3-haiku-20240307") => 0.5,
        ("openai", "gpt-4-turbo-preview") => 10.0,
        ("openai", "gpt-4") => 30.0,
        ("google", "gemini-1.5-pro") => 2.0,
        ("openrouter", "gpt-4o-mini") => 0.8,
        ("openrouter", "llama-3.1-8b-instruct") => 0.1,
        ("groq", "llama3-8b-8192") | ("groq", "mixtral-8x7b-32768") => 0.0,
        ("mistral", "mistral-large") => 2.5,
        ("mistral", "mistral-small") => 0.3,
        ("azure-openai", "gpt-4o") => 10.0,
        ("lm-studio", "local") => 0.0,
        ("deepseek", "deepseek-chat") => 0.5,
        ("moonshot", "kimi-thought") => 1.5,
        ("local", "llama-3.1-8b-instruct") => 0.0,
        _ => DEFAULT_COST_PER_1K,
    }
}

fn latency_ms(provider: &str) -> u32 {
    match provider {
        "anthropic" => 800,
        "openai" => 1200,
        "google" => 1000,
        "openrouter" => 1100,
        "groq" => 700,
        "mistral" => 900,
        "azure-openai" => 1000,
        "lm-studio" => 250,
        "deepseek" => 950,
        "moonshot" => 1050,
        "local" => 200,
        _ => DEFAULT_LATENCY_MS,
    }
}

fn quality_score(model: &str) -> u32 {
    match model {
        "claude-3-5-sonnet-20241022" => 95,
        "gpt-4o" => 92,
        "gpt-4-turbo-preview" => 90,
        "gemini-1.5-pro" => 88,
        "mistral-large" => 85,
        "claude-3-haiku-20240307" => 82,
        "deepseek-chat" => 80,
        "llama3-8b-8192" => 78,
        "llama-3.1-8b-instruct" => 75,
        _ => DEFAULT_QUALITY,
    }
}

fn alternatives_excluding(provider: &str) -> Vec<Alternative> {
    [
        Alternative {
            provider: "openai",
            model: "gpt-4-turbo-preview",
            reason: "reliable alternative with good general performance",
        },
        Alternative {
            provider: "google",
            model: "gemini-1.5-pro",
            reason: "strong on tasks that need a long context",
        },
    ]
    .into_iter()
    .filter(|alt| alt.provider != provider)
    .collect()
}

/// Route by task-type keyword alone, without scoring the catalog.
///
/// Unknown keywords fall through to the general-purpose default.
pub fn quick_route(task_type: &str) -> Result<PresetRoute, CoreError> {
    let normalized = task_type.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(CoreError::InvalidRequest("task type is required".to_string()));
    }

    let preset = preset_for(&normalized);
    tracing::info!(
        task_type = %normalized,
        provider = preset.provider,
        model = preset.model,
        "preset route"
    );

    Ok(PresetRoute {
        task_type: task_type.to_string(),
        selected_provider: preset.provider,
        selected_model: preset.model,
        reasoning: preset.reasoning,
        estimated_metrics: EstimatedMetrics {
            cost_per_1k_tokens: cost_per_1k(preset.provider, preset.model),
            avg_latency_ms: latency_ms(preset.provider),
            quality_score: quality_score(preset.model),
        },
        alternatives: alternatives_excluding(preset.provider),
        timestamp: Utc::now(),
    })
}
