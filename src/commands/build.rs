//! Build command implementation.

use super::discover::discover;
use super::models::BuildArgs;
use super::utils::validate_rpc_args;
use crate::discovery::RpcContext;
use crate::output::{read_json, write_json, Fixture};
use anyhow::{Context, Result};
use log::info;

/// Execute the build command: obtain a context and write the fixture
///
/// With `context_file` set no network call is made.
pub fn execute_build(args: BuildArgs) -> Result<Fixture> {
    let (rpc_url, context) = match &args.context_file {
        Some(path) => {
            info!("Loading context from: {}", path.display());
            let context: RpcContext = read_json(path)
                .with_context(|| format!("Failed to read context from {}", path.display()))?;
            (String::new(), context)
        }
        None => {
            validate_rpc_args(&args.rpc_url, args.timeout_secs)?;
            let context = discover(&args.rpc_url, args.timeout_secs)?;
            (args.rpc_url.clone(), context)
        }
    };

    let fixture = Fixture::new(rpc_url, context);
    info!("Built {} requests", fixture.requests.len());

    write_json(&fixture, &args.output).context("Failed to write fixture JSON")?;
    info!("✓ Fixture written to: {}", args.output.display());

    Ok(fixture)
}
