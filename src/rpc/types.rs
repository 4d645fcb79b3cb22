//! Types for JSON-RPC communication with a Lotus-compatible node.
//!
//! The node speaks both the Ethereum JSON-RPC dialect (`eth_*`, `net_*`,
//! `web3_*`) and the Filecoin dialect (`Filecoin.*`) on the same endpoint.

use crate::utils::config::MAX_REQUEST_ID;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A method name together with its positional parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcMethod {
    pub name: String,
    pub params: Vec<Value>,
}

impl RpcMethod {
    pub fn new(name: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [Value],
}

impl<'a> JsonRpcRequest<'a> {
    /// Wrap a method in a 2.0 envelope with a random id in `0..MAX_REQUEST_ID`
    pub fn new(method: &'a RpcMethod) -> Self {
        Self {
            jsonrpc: "2.0",
            id: rand::thread_rng().gen_range(0..MAX_REQUEST_ID),
            method: &method.name,
            params: &method.params,
        }
    }
}

/// HTTP status plus the decoded response body.
///
/// The body is kept as raw JSON: discovery only checks the presence of the
/// specific fields it needs, and replay only cares whether `result` or
/// `error` came back.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub status: u16,
    pub body: Value,
}

impl RpcResponse {
    /// The `result` member, if the body carries one (it may be `null`)
    pub fn result(&self) -> Option<&Value> {
        self.body.get("result")
    }

    /// The `error` member of a JSON-RPC error response
    pub fn error(&self) -> Option<&Value> {
        self.body.get("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope_shape() {
        let method = RpcMethod::new("eth_getBalance", vec![json!("0xabc"), json!("latest")]);
        let request = JsonRpcRequest::new(&method);
        let encoded = serde_json::to_value(&request).unwrap();

        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["method"], "eth_getBalance");
        assert_eq!(encoded["params"], json!(["0xabc", "latest"]));
        assert!(encoded["id"].as_u64().unwrap() < MAX_REQUEST_ID);
    }

    #[test]
    fn test_response_result_may_be_null() {
        let response = RpcResponse {
            status: 200,
            body: json!({"jsonrpc": "2.0", "id": 1, "result": null}),
        };
        assert_eq!(response.result(), Some(&Value::Null));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_response_error_has_no_result() {
        let response = RpcResponse {
            status: 200,
            body: json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32601, "message": "method not found"}}),
        };
        assert!(response.result().is_none());
        assert_eq!(response.error().unwrap()["code"], -32601);
    }
}
