use crate::catalog::build_requests;
use crate::discovery::{CidLink, RpcContext};
use crate::rpc::RpcClient;
use crate::utils::config::{ETH_ZERO_ADDRESS, FIXTURE_SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::time::Duration;

/// Validate an RPC endpoint URL and optional timeout
///
/// **Public** - shared by every command that talks to a node
pub fn validate_rpc_args(rpc_url: &str, timeout_secs: Option<u64>) -> Result<()> {
    if rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    if timeout_secs == Some(0) {
        anyhow::bail!("timeout must be greater than 0");
    }

    Ok(())
}

/// Build the HTTP transport for a command
pub fn connect(rpc_url: &str, timeout_secs: Option<u64>) -> Result<RpcClient> {
    RpcClient::with_timeout(rpc_url, timeout_secs.map(Duration::from_secs))
        .context("Failed to create RPC client")
}

/// Print every method the catalog produces
pub fn display_methods() {
    // The key set does not depend on context values
    let placeholder = RpcContext {
        eth_address: ETH_ZERO_ADDRESS.to_string(),
        eth_block_number: "0x0".to_string(),
        eth_block_hash: String::new(),
        eth_transaction_hash: String::new(),
        eth_zero_address: ETH_ZERO_ADDRESS.to_string(),
        filecoin_address: String::new(),
        filecoin_miner_id: String::new(),
        filecoin_actor_id: String::new(),
        filecoin_tipset_height: 0,
        filecoin_tipset_key: Vec::new(),
        filecoin_message_cid: CidLink::new(""),
        filecoin_multisig_address: String::new(),
        eth_contract_address: String::new(),
        eth_contract_call_data: String::new(),
    };

    let requests = build_requests(&placeholder);
    println!("{} methods in catalog:", requests.len());
    for name in requests.keys() {
        println!("  {}", name);
    }
}

/// Display version information
pub fn display_version() {
    println!("Filecoin RPC Fixtures v{}", env!("CARGO_PKG_VERSION"));
    println!("Fixture Schema: v{}", FIXTURE_SCHEMA_VERSION);
    println!();
    println!("Discovers live parameters from a Filecoin/Ethereum JSON-RPC node");
    println!("and builds replayable request fixtures.");
}
