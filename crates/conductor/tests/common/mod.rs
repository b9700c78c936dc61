use conductor_core::{Capability, ModelDescriptor, PerformanceRecord, TaskRequest, TaskType};

#[allow(dead_code)]
pub fn sample_model(
    key: &str,
    capabilities: &[(Capability, f64)],
    avg_response_time: f64,
    success_rate: f64,
    cost_per_token: f64,
) -> ModelDescriptor {
    ModelDescriptor {
        id: key.to_string(),
        name: key.to_string(),
        provider: "fixture".to_string(),
        model_key: key.to_string(),
        capabilities: capabilities.iter().copied().collect(),
        performance: PerformanceRecord {
            avg_response_time,
            success_rate,
        },
        cost_per_token,
        max_context_length: 8192,
        is_active: true,
    }
}

#[allow(dead_code)]
pub fn sample_request(task_type: TaskType) -> TaskRequest {
    TaskRequest::new("sample task", task_type)
}

#[allow(dead_code)]
pub fn private_request(task_type: TaskType) -> TaskRequest {
    TaskRequest {
        privacy_required: true,
        ..sample_request(task_type)
    }
}
