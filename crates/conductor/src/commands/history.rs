use crate::commands::route::load_history;
use crate::settings::Settings;
use conductor_core::SelectionHistory;
use conductor_telemetry::{JsonlLog, Paths, RoutingEvent};
use std::collections::HashMap;

fn compute_stats(events: &[RoutingEvent]) -> String {
    if events.is_empty() {
        return "No routing events to analyze.".to_string();
    }
    let total = events.len();
    let avg_confidence = events.iter().map(|e| e.confidence).sum::<f64>() / total as f64;
    let private = events.iter().filter(|e| e.privacy_required).count();

    let mut per_model: HashMap<&str, usize> = HashMap::new();
    for event in events {
        *per_model.entry(event.model_name.as_str()).or_insert(0) += 1;
    }
    let mut per_model: Vec<_> = per_model.into_iter().collect();
    per_model.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut out = format!(
        "Total selections: {}\n\
         Avg confidence: {:.1}%\n\
         Privacy-required: {}",
        total, avg_confidence, private
    );
    out.push_str("\nBy model:");
    for (name, count) in per_model {
        out.push_str(&format!("\n  {name}: {count}"));
    }
    out
}

fn format_history(history: &SelectionHistory) -> String {
    let mut lines = vec![
        format!("Recent Selections (last {})", history.len()),
        "=========================".to_string(),
    ];
    for record in history.iter() {
        lines.push(format!(
            "  {} | {} -> {} ({}) conf:{:.0}%",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.task_type,
            record.selected_model.name,
            record.selected_model.provider,
            record.confidence,
        ));
    }
    lines.join("\n")
}

pub fn run(stats: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;

    if stats {
        let events: Vec<RoutingEvent> = JsonlLog::new(paths.routing_log()).read_all()?;
        println!("{}", compute_stats(&events));
        return Ok(());
    }

    let settings = Settings::load(&paths);
    let history = load_history(&paths, settings.config.history_capacity);
    if history.is_empty() {
        println!("No selection history");
        return Ok(());
    }
    println!("{}", format_history(&history));
    Ok(())
}
