pub fn run(description: &str) -> anyhow::Result<()> {
    if description.trim().is_empty() {
        anyhow::bail!("task description is required");
    }
    let classification = conductor_tasks::classify_detailed(description);
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}
