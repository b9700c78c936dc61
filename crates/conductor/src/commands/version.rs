pub fn run() -> anyhow::Result<()> {
    println!("conductor {}", env!("CARGO_PKG_VERSION"));
    println!("Capability-scored LLM provider selection and task decomposition");
    Ok(())
}
