use conductor_core::quick_route;

pub fn run(task_type: &str) -> anyhow::Result<()> {
    let route = quick_route(task_type)?;
    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}
