mod cli;
mod commands;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Models { all } => commands::models::run(all),
        Commands::Route(args) => commands::route::run(&args),
        Commands::History { stats } => commands::history::run(stats),
        Commands::Classify { description } => commands::classify::run(&description),
        Commands::Plan { description, mode } => commands::plan::run(&description, &mode),
        Commands::Quick { task_type } => commands::quick::run(&task_type),
        Commands::Version => commands::version::run(),
    }
}
