//! Filecoin RPC Fixtures CLI
//!
//! Discovers request parameters from a live Filecoin/Ethereum JSON-RPC node
//! and builds, writes and replays request fixtures.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use fil_rpc_fixtures::commands::{
    display_methods, display_version, execute_build, execute_discover, execute_replay, BuildArgs,
    DiscoverArgs, ReplayArgs,
};
use fil_rpc_fixtures::utils::config::{DEFAULT_RPC_URL, RPC_URL_ENV};

/// Filecoin RPC Fixtures - request fixtures for Lotus-compatible nodes
#[derive(Parser, Debug)]
#[command(name = "rpc-fixtures")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Discover request parameters from a node and write them as JSON
    Discover {
        /// RPC endpoint URL
        #[arg(short, long, env = RPC_URL_ENV, default_value = DEFAULT_RPC_URL)]
        rpc: String,

        /// Output path for the context JSON
        #[arg(short, long, default_value = "context.json")]
        output: PathBuf,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Build the request catalog and write a fixture
    Build {
        /// RPC endpoint URL (ignored with --context)
        #[arg(short, long, env = RPC_URL_ENV, default_value = DEFAULT_RPC_URL)]
        rpc: String,

        /// Use a previously discovered context instead of querying the node
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Output path for the fixture JSON
        #[arg(short, long, default_value = "fixture.json")]
        output: PathBuf,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Replay a fixture's requests against a node
    Replay {
        /// RPC endpoint URL
        #[arg(short, long, env = RPC_URL_ENV, default_value = DEFAULT_RPC_URL)]
        rpc: String,

        /// Fixture JSON produced by `build`
        #[arg(short, long, default_value = "fixture.json")]
        input: PathBuf,

        /// Only replay this method (repeatable)
        #[arg(short, long = "method")]
        methods: Vec<String>,

        /// Exit with an error if any request fails
        #[arg(long)]
        fail_on_error: bool,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// List the methods in the request catalog
    Methods,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Discover {
            rpc,
            output,
            timeout,
        } => {
            execute_discover(DiscoverArgs {
                rpc_url: rpc,
                output,
                timeout_secs: timeout,
            })?;
        }

        Commands::Build {
            rpc,
            context,
            output,
            timeout,
        } => {
            execute_build(BuildArgs {
                rpc_url: rpc,
                context_file: context,
                output,
                timeout_secs: timeout,
            })?;
        }

        Commands::Replay {
            rpc,
            input,
            methods,
            fail_on_error,
            timeout,
        } => {
            execute_replay(ReplayArgs {
                rpc_url: rpc,
                input,
                methods,
                fail_on_error,
                timeout_secs: timeout,
            })?;
        }

        Commands::Methods => {
            display_methods();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
