//! JSON-RPC transport for Lotus-compatible nodes.

pub mod client;
pub mod types;

// Re-export main types
pub use client::{RpcClient, RpcTransport};
pub use types::{JsonRpcRequest, RpcMethod, RpcResponse};
