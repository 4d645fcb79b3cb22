//! Discover command implementation.

use super::models::DiscoverArgs;
use super::utils::{connect, validate_rpc_args};
use crate::discovery::{fetch_rpc_context, RpcContext};
use crate::output::write_json;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the discover command: run discovery and write the context
///
/// **Public** - main entry point called from main.rs
pub fn execute_discover(args: DiscoverArgs) -> Result<RpcContext> {
    validate_rpc_args(&args.rpc_url, args.timeout_secs)?;
    let start_time = Instant::now();

    let context = discover(&args.rpc_url, args.timeout_secs)?;

    write_json(&context, &args.output).context("Failed to write context JSON")?;
    info!("✓ Context written to: {}", args.output.display());

    info!("Discovery completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(context)
}

pub(crate) fn discover(rpc_url: &str, timeout_secs: Option<u64>) -> Result<RpcContext> {
    info!("Discovering context from: {}", rpc_url);

    let client = connect(rpc_url, timeout_secs)?;
    fetch_rpc_context(&client).with_context(|| format!("Failed to discover context from {}", rpc_url))
}
