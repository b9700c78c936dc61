use crate::cli::RouteArgs;
use crate::settings::Settings;
use conductor_core::{
    active_models, CapabilityScorer, ModelDescriptor, SelectionHistory, SelectionRecord,
    TaskRequest,
};
use conductor_telemetry::{read_json, write_json_atomic, JsonlLog, Paths, RoutingEvent};

const RUNNERS_UP: usize = 3;

fn build_request(args: &RouteArgs) -> anyhow::Result<TaskRequest> {
    if args.description.trim().is_empty() {
        anyhow::bail!("task description is required");
    }
    Ok(TaskRequest {
        description: args.description.clone(),
        task_type: args.task_type.parse()?,
        priority: args.priority.parse()?,
        context_length: args.context_length,
        privacy_required: args.privacy,
        max_cost: args.max_cost,
    })
}

pub(crate) fn load_history(paths: &Paths, capacity: usize) -> SelectionHistory {
    let stored = match read_json::<SelectionHistory>(&paths.history_file()) {
        Ok(history) => history.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%err, "starting with empty history");
            SelectionHistory::default()
        }
    };
    stored.resized(capacity)
}

/// Select a model over the active catalog, then persist history and log
pub(crate) fn route_and_persist(
    paths: &Paths,
    settings: &Settings,
    request: &TaskRequest,
) -> anyhow::Result<SelectionRecord> {
    let candidates = active_models(&settings.models);
    let scorer = CapabilityScorer::new(settings.config.clone());
    let history = load_history(paths, settings.config.history_capacity);

    let (record, history) = scorer.route(&history, request, &candidates)?;
    write_json_atomic(&paths.history_file(), &history)?;

    let event = RoutingEvent {
        timestamp: record.timestamp,
        task_type: record.task_type.to_string(),
        model_key: record.selected_model.model_key.clone(),
        model_name: record.selected_model.name.clone(),
        provider: record.selected_model.provider.clone(),
        score: record.score,
        confidence: record.confidence,
        privacy_required: request.privacy_required,
        candidates: candidates.len(),
    };
    JsonlLog::new(paths.routing_log()).append(&event)?;

    Ok(record)
}

pub fn run(args: &RouteArgs) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = Settings::load(&paths);
    let request = build_request(args)?;
    let record = route_and_persist(&paths, &settings, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let model = &record.selected_model;
    println!("Selected: {} ({})", model.name, model.provider);
    println!("Model key: {}", model.model_key);
    println!("Confidence: {:.0}%", record.confidence);
    println!("Reasoning: {}", record.reasoning);

    let candidates = active_models(&settings.models);
    let runners_up = format_runners_up(&settings, &request, &candidates);
    if !runners_up.is_empty() {
        println!("\nRunners-up:\n{runners_up}");
    }
    Ok(())
}

fn format_runners_up(
    settings: &Settings,
    request: &TaskRequest,
    candidates: &[ModelDescriptor],
) -> String {
    let scorer = CapabilityScorer::new(settings.config.clone());
    scorer
        .rank(request, candidates)
        .iter()
        .skip(1)
        .take(RUNNERS_UP)
        .map(|ranked| format!("  {:<24} {:>7.2}", ranked.model.name, ranked.score))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsFile;
    use conductor_core::{CoreError, TaskType};
    use tempfile::TempDir;

    fn args(description: &str, task_type: &str) -> RouteArgs {
        RouteArgs {
            description: description.to_string(),
            task_type: task_type.to_string(),
            priority: "medium".to_string(),
            context_length: 4000,
            privacy: false,
            max_cost: 0.1,
            json: false,
        }
    }

    #[test]
    fn test_build_request_validates() {
        assert!(build_request(&args("  ", "coding")).is_err());
        assert!(build_request(&args("ok", "poetry")).is_err());

        let request = build_request(&args("refactor", "Coding")).unwrap();
        assert_eq!(request.task_type, TaskType::Coding);
    }

    #[test]
    fn test_route_persists_history_and_event() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let settings = Settings::from_file(SettingsFile::default());
        let request = build_request(&args("refactor the parser", "coding")).unwrap();

        let record = route_and_persist(&paths, &settings, &request).unwrap();

        let history = load_history(&paths, 5);
        assert_eq!(history.latest(), Some(&record));

        let events: Vec<RoutingEvent> = JsonlLog::new(paths.routing_log()).read_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].model_key, record.selected_model.model_key);
        assert_eq!(events[0].candidates, 11);
    }

    #[test]
    fn test_history_capped_across_runs() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let settings = Settings::from_file(SettingsFile::default());
        let request = build_request(&args("refactor", "coding")).unwrap();

        for _ in 0..7 {
            route_and_persist(&paths, &settings, &request).unwrap();
        }

        assert_eq!(load_history(&paths, 5).len(), 5);
        let events: Vec<RoutingEvent> = JsonlLog::new(paths.routing_log()).read_all().unwrap();
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn test_inactive_catalog_is_no_eligible_model() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let mut settings = Settings::from_file(SettingsFile::default());
        for model in &mut settings.models {
            model.is_active = false;
        }
        let request = build_request(&args("anything", "general")).unwrap();

        let err = route_and_persist(&paths, &settings, &request).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::NoEligibleModel)
        );
        assert!(!paths.history_file().exists());
    }

    #[test]
    fn test_runners_up_skip_winner() {
        let settings = Settings::from_file(SettingsFile::default());
        let request = build_request(&args("refactor", "coding")).unwrap();

        let text = format_runners_up(&settings, &request, &settings.models);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), RUNNERS_UP);
        // gpt-4o wins coding; Claude 3.5 Sonnet is next at 79.70
        assert!(!text.contains("Azure OpenAI GPT-4o"));
        assert!(lines[0].contains("Claude 3.5 Sonnet"));
    }

    #[test]
    fn test_corrupt_history_starts_fresh() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        std::fs::write(paths.history_file(), "[oops").unwrap();
        assert!(load_history(&paths, 5).is_empty());
    }
}
