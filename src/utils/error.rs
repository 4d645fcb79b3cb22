//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors that abort a discovery run
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("RPC call {method} failed: {source}")]
    Rpc {
        method: String,
        #[source]
        source: RpcError,
    },

    #[error("Failed to retrieve {0}")]
    MissingField(&'static str),

    #[error("Malformed {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("Failed to determine network name")]
    NetworkName,

    #[error("No valid multisig address found among candidates")]
    NoMultisig,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
