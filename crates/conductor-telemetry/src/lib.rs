//! Telemetry and persistence helpers for routing decisions

mod error;
mod io;
mod paths;
mod tokens;
mod types;

pub use error::TelemetryError;
pub use io::{atomic_write, read_json, write_json_atomic, JsonlLog};
pub use paths::Paths;
pub use tokens::estimate_tokens;
pub use types::RoutingEvent;
