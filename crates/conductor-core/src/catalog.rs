//! Built-in model catalog

use crate::types::{Capability, ModelDescriptor, PerformanceRecord};

#[allow(clippy::too_many_arguments)]
fn model(
    id: &str,
    name: &str,
    provider: &str,
    model_key: &str,
    capabilities: &[(Capability, f64)],
    (avg_response_time, success_rate): (f64, f64),
    cost_per_token: f64,
    max_context_length: u64,
) -> ModelDescriptor {
    ModelDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        model_key: model_key.to_string(),
        capabilities: capabilities.iter().copied().collect(),
        performance: PerformanceRecord {
            avg_response_time,
            success_rate,
        },
        cost_per_token,
        max_context_length,
        is_active: true,
    }
}

/// The fixed provider/model list loaded at startup
pub fn default_catalog() -> Vec<ModelDescriptor> {
    vec![
        model(
            "1",
            "GPT-4 Turbo",
            "OpenAI",
            "gpt-4-turbo",
            &[(Capability::Coding, 95.0), (Capability::Reasoning, 90.0), (Capability::Multimodal, 85.0)],
            (2.1, 96.2),
            0.00003,
            128000,
        ),
        model(
            "2",
            "Claude 3.5 Sonnet",
            "Anthropic",
            "claude-3-5-sonnet",
            &[(Capability::Coding, 98.0), (Capability::Reasoning, 95.0), (Capability::Analysis, 92.0)],
            (1.8, 97.5),
            0.000015,
            200000,
        ),
        model(
            "3",
            "Gemini 1.5 Pro",
            "Google",
            "gemini-1.5-pro",
            &[(Capability::Multimodal, 98.0), (Capability::Reasoning, 88.0), (Capability::Coding, 85.0)],
            (1.5, 94.8),
            0.0000125,
            2097152,
        ),
        model(
            "4",
            "Llama 3.1 70B",
            "Meta (Local)",
            "llama-3.1-70b",
            &[(Capability::Privacy, 100.0), (Capability::Coding, 82.0), (Capability::Reasoning, 85.0)],
            (3.2, 91.3),
            0.0,
            131072,
        ),
        model(
            "5",
            "OpenRouter (multi)",
            "OpenRouter",
            "gpt-4o-mini",
            &[(Capability::Coding, 85.0), (Capability::Reasoning, 85.0), (Capability::Multimodal, 80.0)],
            (2.0, 95.0),
            0.000008,
            128000,
        ),
        model(
            "6",
            "Groq Llama3-8B",
            "Groq",
            "llama3-8b-8192",
            &[(Capability::Coding, 82.0), (Capability::Reasoning, 80.0), (Capability::Multimodal, 0.0)],
            (0.7, 92.0),
            0.0,
            8192,
        ),
        model(
            "7",
            "Mistral Large",
            "Mistral",
            "mistral-large",
            &[(Capability::Coding, 88.0), (Capability::Reasoning, 86.0), (Capability::Multimodal, 0.0)],
            (0.9, 93.0),
            0.0000125,
            32000,
        ),
        model(
            "8",
            "Azure OpenAI GPT-4o",
            "Azure OpenAI",
            "gpt-4o",
            &[(Capability::Coding, 92.0), (Capability::Reasoning, 90.0), (Capability::Multimodal, 90.0)],
            (1.0, 96.0),
            0.00003,
            128000,
        ),
        model(
            "9",
            "LM Studio (Local)",
            "LM Studio",
            "local",
            &[(Capability::Privacy, 100.0), (Capability::Coding, 70.0), (Capability::Reasoning, 70.0)],
            (0.25, 85.0),
            0.0,
            8192,
        ),
        model(
            "10",
            "DeepSeek Chat",
            "DeepSeek",
            "deepseek-chat",
            &[(Capability::Coding, 82.0), (Capability::Reasoning, 84.0), (Capability::Multimodal, 0.0)],
            (0.95, 92.0),
            0.000005,
            32000,
        ),
        model(
            "11",
            "Kimi (Moonshot)",
            "Moonshot",
            "kimi-thought",
            &[(Capability::Coding, 80.0), (Capability::Reasoning, 86.0), (Capability::Multimodal, 0.0)],
            (1.05, 90.0),
            0.00001,
            128000,
        ),
    ]
}

/// Models with the active flag set, in catalog order
pub fn active_models(models: &[ModelDescriptor]) -> Vec<ModelDescriptor> {
    models.iter().filter(|m| m.is_active).cloned().collect()
}

/// Look up a model by id or model key
pub fn find_model<'a>(models: &'a [ModelDescriptor], key: &str) -> Option<&'a ModelDescriptor> {
    models.iter().find(|m| m.model_key == key || m.id == key)
}
