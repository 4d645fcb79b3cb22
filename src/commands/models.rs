use crate::utils::config::DEFAULT_RPC_URL;
use std::path::PathBuf;

/// Arguments for the discover command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DiscoverArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Output path for the context JSON
    pub output: PathBuf,

    /// Per-request timeout in seconds (None = HTTP client default)
    pub timeout_secs: Option<u64>,
}

impl Default for DiscoverArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            output: PathBuf::from("context.json"),
            timeout_secs: None,
        }
    }
}

/// Arguments for the build command
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// RPC endpoint URL, used when no context file is given
    pub rpc_url: String,

    /// Previously discovered context; skips discovery when set
    pub context_file: Option<PathBuf>,

    /// Output path for the fixture JSON
    pub output: PathBuf,

    pub timeout_secs: Option<u64>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            context_file: None,
            output: PathBuf::from("fixture.json"),
            timeout_secs: None,
        }
    }
}

/// Arguments for the replay command
#[derive(Debug, Clone)]
pub struct ReplayArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Fixture produced by `build`
    pub input: PathBuf,

    /// Only replay these methods (empty = all)
    pub methods: Vec<String>,

    /// Treat any RPC error or transport failure as a command failure
    pub fail_on_error: bool,

    pub timeout_secs: Option<u64>,
}

impl Default for ReplayArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            input: PathBuf::from("fixture.json"),
            methods: Vec::new(),
            fail_on_error: false,
            timeout_secs: None,
        }
    }
}
