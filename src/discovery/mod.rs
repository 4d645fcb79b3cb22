//! Discovery of live request parameters from a running node.
//!
//! This module handles:
//! - The `RpcContext` record and its JSON shape
//! - Network-specific constants (miner, contract, calldata)
//! - The ordered sequence of exploratory RPC calls

pub mod context;
pub mod fetch;
pub mod network;

// Re-export main types
pub use context::{CidLink, RpcContext};
pub use fetch::{fetch_rpc_context, ContextDiscovery};
pub use network::{profile_for, NetworkProfile};
