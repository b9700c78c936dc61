use crate::settings::Settings;
use conductor_core::{active_models, ModelDescriptor};
use conductor_telemetry::Paths;

fn format_model(model: &ModelDescriptor) -> String {
    let capabilities = model
        .capabilities
        .iter()
        .map(|(cap, value)| format!("{cap}:{value:.0}"))
        .collect::<Vec<_>>()
        .join(" ");
    let status = if model.is_active { "" } else { " [inactive]" };
    format!(
        "  {:<24} {:<10} {:<28} ${:.7}/tok  ctx:{:<8} {}{}",
        model.name,
        model.provider,
        model.model_key,
        model.cost_per_token,
        model.max_context_length,
        capabilities,
        status,
    )
}

fn format_models(models: &[ModelDescriptor]) -> String {
    let mut lines = vec![
        format!("Models ({})", models.len()),
        "==========".to_string(),
    ];
    lines.extend(models.iter().map(format_model));
    lines.join("\n")
}

pub fn run(all: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = Settings::load(&paths);

    let models = if all {
        settings.models
    } else {
        active_models(&settings.models)
    };
    if models.is_empty() {
        println!("No models configured");
        return Ok(());
    }
    println!("{}", format_models(&models));
    Ok(())
}
