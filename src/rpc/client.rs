//! HTTP client for communicating with the node's JSON-RPC endpoint.

use super::types::{JsonRpcRequest, RpcMethod, RpcResponse};
use crate::utils::error::RpcError;
use log::{debug, error};
use reqwest::blocking::Client;
use std::time::Duration;

/// Anything that can carry one JSON-RPC call to a node and hand back the
/// decoded response.
///
/// Discovery and replay are written against this trait so they can be
/// driven by a scripted node in tests.
pub trait RpcTransport {
    fn send(&self, method: &RpcMethod) -> Result<RpcResponse, RpcError>;
}

/// Blocking HTTP transport
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a client that relies on reqwest's default timeouts
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, RpcError> {
        Self::with_timeout(rpc_url, None)
    }

    /// Create a client, optionally with an overall per-request timeout
    pub fn with_timeout(
        rpc_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RpcError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl RpcTransport for RpcClient {
    fn send(&self, method: &RpcMethod) -> Result<RpcResponse, RpcError> {
        let request = JsonRpcRequest::new(method);

        debug!(
            "Sending {} (id {}) to {} with params: {:?}",
            method.name, request.id, self.rpc_url, method.params
        );

        // `.json()` also sets Content-Type: application/json
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .map_err(|e| {
                error!("Failed to send {} to {}: {}", method.name, self.rpc_url, e);
                RpcError::RequestFailed(e)
            })?;

        // Non-2xx statuses are handed back to the caller untouched
        let status = response.status().as_u16();

        let text = response.text().map_err(|e| {
            error!("Failed to read response body for {}: {}", method.name, e);
            RpcError::RequestFailed(e)
        })?;

        let body = serde_json::from_str(&text).map_err(|e| {
            error!(
                "Failed to parse JSON response from {} for {}: {}",
                self.rpc_url, method.name, e
            );
            RpcError::InvalidJson(e)
        })?;

        debug!("{} -> HTTP {}: {}", method.name, status, body);

        Ok(RpcResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_url() {
        let client = RpcClient::new("http://localhost:1234/rpc/v1").unwrap();
        assert_eq!(client.rpc_url(), "http://localhost:1234/rpc/v1");

        let client =
            RpcClient::with_timeout("http://localhost:1234/rpc/v1", Some(Duration::from_secs(5)))
                .unwrap();
        assert_eq!(client.rpc_url(), "http://localhost:1234/rpc/v1");
    }
}
