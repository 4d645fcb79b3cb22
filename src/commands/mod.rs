//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod build;
pub mod discover;
pub mod models;
pub mod replay;
pub mod utils;

// Re-export main command functions
pub use build::execute_build;
pub use discover::execute_discover;
pub use models::{BuildArgs, DiscoverArgs, ReplayArgs};
pub use replay::{execute_replay, replay_requests, select_methods, ReplayOutcome, ReplayReport};
pub use utils::{display_methods, display_version, validate_rpc_args};
