use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "conductor")]
#[command(version)]
#[command(about = "Pick the right LLM provider for a task")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default ~/.conductor/conductor.json
    Init,

    /// List catalog models
    Models {
        /// Include inactive models
        #[arg(long)]
        all: bool,
    },

    /// Score the catalog and select a model for a task
    Route(RouteArgs),

    /// Show recent selections
    History {
        /// Show statistics from the routing log
        #[arg(long)]
        stats: bool,
    },

    /// Classify a task description
    Classify { description: String },

    /// Decompose a task description into a plan
    Plan {
        description: String,

        /// Execution mode: step_by_step, continuous or parallel
        #[arg(short, long, default_value = "step_by_step")]
        mode: String,
    },

    /// Fixed provider/model for a task-type keyword
    Quick { task_type: String },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    pub description: String,

    /// coding, reasoning, multimodal, analysis or general
    #[arg(short = 't', long = "type", default_value = "general")]
    pub task_type: String,

    /// low, medium or high
    #[arg(short, long, default_value = "medium")]
    pub priority: String,

    /// Requested context length in tokens
    #[arg(short, long, default_value_t = 4000)]
    pub context_length: u64,

    /// Only fully private models avoid the privacy penalty
    #[arg(long)]
    pub privacy: bool,

    /// Maximum acceptable cost per token
    #[arg(long, default_value_t = 0.1)]
    pub max_cost: f64,

    /// Print the selection record as JSON
    #[arg(long)]
    pub json: bool,
}
